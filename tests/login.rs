use intern_portal::login::{LoginField, LoginForm, SubmitOutcome};
use intern_portal::route::Route;

fn form(name: &str, email: &str) -> LoginForm {
    LoginForm {
        name: name.to_string(),
        email: email.to_string(),
        ..LoginForm::default()
    }
}

#[test]
fn filled_form_navigates_to_dashboard() {
    let mut login = form("  Anu Kumar ", " anu@example.com");
    let outcome = login.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            route: Route::Dashboard {
                name: "Anu Kumar".to_string()
            },
            email: "anu@example.com".to_string(),
        }
    );
}

#[test]
fn missing_name_blocks_and_marks_only_name() {
    let mut login = form("", "a@b.com");
    login.focus = LoginField::Email;

    assert_eq!(login.submit(), SubmitOutcome::Blocked);
    assert!(login.is_invalid(LoginField::Name));
    assert!(!login.is_invalid(LoginField::Email));
    assert_eq!(login.focus, LoginField::Name);
}

#[test]
fn both_empty_focuses_name() {
    let mut login = form("", "   ");
    assert_eq!(login.submit(), SubmitOutcome::Blocked);
    assert!(login.is_invalid(LoginField::Name));
    assert!(login.is_invalid(LoginField::Email));
    assert_eq!(login.focus, LoginField::Name);
}

#[test]
fn missing_email_focuses_email() {
    let mut login = form("Ravi", "");
    assert_eq!(login.submit(), SubmitOutcome::Blocked);
    assert!(!login.is_invalid(LoginField::Name));
    assert!(login.is_invalid(LoginField::Email));
    assert_eq!(login.focus, LoginField::Email);
}

#[test]
fn typing_clears_invalid_mark_of_focused_field() {
    let mut login = form("", "");
    login.submit();

    login.input('R');
    assert!(!login.is_invalid(LoginField::Name));
    assert!(login.is_invalid(LoginField::Email));

    login.focus_next();
    login.input('r');
    login.backspace();
    assert!(!login.is_invalid(LoginField::Email));
    assert_eq!(login.name, "R");
    assert_eq!(login.email, "");
}

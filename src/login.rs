use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields were filled. The email is handed back so the caller can
    /// remember it.
    Navigate { route: Route, email: String },
    Blocked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub name_invalid: bool,
    pub email_invalid: bool,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, ch: char) {
        self.focused_value_mut().push(ch);
        self.clear_focused_invalid();
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
        self.clear_focused_invalid();
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Name => LoginField::Email,
            LoginField::Email => LoginField::Name,
        };
    }

    pub fn is_invalid(&self, field: LoginField) -> bool {
        match field {
            LoginField::Name => self.name_invalid,
            LoginField::Email => self.email_invalid,
        }
    }

    /// Invalid fields stay marked until the user types into them. Focus moves
    /// to the first invalid field, name before email.
    pub fn submit(&mut self) -> SubmitOutcome {
        let name = self.name.trim();
        let email = self.email.trim();

        if !name.is_empty() && !email.is_empty() {
            return SubmitOutcome::Navigate {
                route: Route::Dashboard {
                    name: name.to_string(),
                },
                email: email.to_string(),
            };
        }

        let name_missing = name.is_empty();
        let email_missing = email.is_empty();
        if email_missing {
            self.email_invalid = true;
            self.focus = LoginField::Email;
        }
        if name_missing {
            self.name_invalid = true;
            self.focus = LoginField::Name;
        }
        SubmitOutcome::Blocked
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Name => &mut self.name,
            LoginField::Email => &mut self.email,
        }
    }

    fn clear_focused_invalid(&mut self) {
        match self.focus {
            LoginField::Name => self.name_invalid = false,
            LoginField::Email => self.email_invalid = false,
        }
    }
}

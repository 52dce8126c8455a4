use intern_portal::document::{
    DISPLAY_NAME, PARTICIPANT_COUNT, REFERRAL_CODE, TOP_PERFORMER, TOTAL_DONATIONS, TOTAL_RAISED,
};
use intern_portal::model::{InternProfile, LeaderboardEntry, Payload, Resource};
use intern_portal::route::Route;
use intern_portal::state::{AppState, Delta, PageContext, ProviderCommand, apply_delta};
use intern_portal::theme::Theme;

fn state_on(route: Route) -> AppState {
    AppState::new(PageContext {
        route,
        theme: Theme::Light,
    })
}

fn dashboard_route() -> Route {
    Route::Dashboard {
        name: "Praveen".to_string(),
    }
}

fn start(state: &mut AppState) -> u64 {
    match state.begin_load() {
        Some(ProviderCommand::Fetch { load_id, .. }) => load_id,
        None => panic!("page should request data"),
    }
}

#[test]
fn failed_intern_fetch_renders_sample_profile() {
    let mut state = state_on(dashboard_route());
    let load_id = start(&mut state);
    assert!(state.loading);

    apply_delta(
        &mut state,
        Delta::Loaded {
            resource: Resource::Intern,
            load_id,
            payload: None,
        },
    );

    assert!(!state.loading);
    let doc = &state.document;
    assert_eq!(doc.text(DISPLAY_NAME), Some("Praveen Revalla"));
    assert_eq!(doc.text(REFERRAL_CODE), Some("praveen2025"));
    assert_eq!(doc.text(TOTAL_DONATIONS), Some("1700"));
    let unlocked: Vec<bool> = doc.reward_cards().map(|card| card.unlocked).collect();
    assert_eq!(unlocked, [true, true, false]);
}

#[test]
fn failed_leaderboard_fetch_renders_sample_board() {
    let mut state = state_on(Route::Leaderboard);
    let load_id = start(&mut state);

    apply_delta(
        &mut state,
        Delta::Loaded {
            resource: Resource::Leaderboard,
            load_id,
            payload: None,
        },
    );

    let doc = &state.document;
    let rows: Vec<(String, String)> = doc
        .leaderboard_rows()
        .map(|row| (row.name.clone(), row.total.clone()))
        .collect();
    assert_eq!(
        rows,
        [
            ("Anu".to_string(), "₹2200".to_string()),
            ("Praveen".to_string(), "₹1700".to_string()),
            ("Ravi".to_string(), "₹900".to_string()),
        ]
    );
    assert_eq!(doc.text(TOP_PERFORMER), Some("Anu"));
    assert_eq!(doc.text(TOTAL_RAISED), Some("4800"));
    assert_eq!(doc.text(PARTICIPANT_COUNT), Some("3"));
}

#[test]
fn live_data_passes_through() {
    let mut state = state_on(dashboard_route());
    let load_id = start(&mut state);

    apply_delta(
        &mut state,
        Delta::Loaded {
            resource: Resource::Intern,
            load_id,
            payload: Some(Payload::Intern(InternProfile::new(
                "Meera Nair",
                "meera2025",
                900,
            ))),
        },
    );

    assert_eq!(state.document.text(DISPLAY_NAME), Some("Meera Nair"));
    assert_eq!(state.document.reward_cards().filter(|c| c.unlocked).count(), 0);
}

#[test]
fn empty_live_board_is_not_replaced_by_samples() {
    let mut state = state_on(Route::Leaderboard);
    let load_id = start(&mut state);

    apply_delta(
        &mut state,
        Delta::Loaded {
            resource: Resource::Leaderboard,
            load_id,
            payload: Some(Payload::Leaderboard(Vec::new())),
        },
    );

    assert_eq!(state.document.leaderboard_rows().count(), 0);
    assert_eq!(state.document.text(TOP_PERFORMER), Some("-"));
    assert_eq!(state.document.text(PARTICIPANT_COUNT), Some("0"));
}

#[test]
fn result_for_previous_page_is_dropped() {
    let mut state = state_on(dashboard_route());
    let old_load = start(&mut state);

    let cmd = state.navigate(Route::Leaderboard);
    assert!(matches!(
        cmd,
        Some(ProviderCommand::Fetch {
            resource: Resource::Leaderboard,
            ..
        })
    ));

    apply_delta(
        &mut state,
        Delta::Loaded {
            resource: Resource::Intern,
            load_id: old_load,
            payload: None,
        },
    );

    assert!(state.loading);
    assert_eq!(state.document.leaderboard_rows().count(), 0);
    assert!(!state.document.contains(DISPLAY_NAME));
    assert!(
        state
            .logs
            .back()
            .is_some_and(|line| line.contains("stale intern"))
    );
}

#[test]
fn reload_rerenders_without_duplicates() {
    let board = vec![
        LeaderboardEntry::new("Anu", "anu2025", 2200),
        LeaderboardEntry::new("Ravi", "ravi2025", 900),
    ];
    let mut state = state_on(Route::Leaderboard);

    for _ in 0..2 {
        let load_id = match state.reload() {
            Some(ProviderCommand::Fetch { load_id, .. }) => load_id,
            None => panic!("leaderboard should request data"),
        };
        apply_delta(
            &mut state,
            Delta::Loaded {
                resource: Resource::Leaderboard,
                load_id,
                payload: Some(Payload::Leaderboard(board.clone())),
            },
        );
    }

    assert_eq!(state.document.leaderboard_rows().count(), 2);
    assert_eq!(state.document.text(TOTAL_RAISED), Some("3100"));
}

#[test]
fn login_page_requests_nothing() {
    let mut state = state_on(Route::Login);
    assert!(state.begin_load().is_none());
    assert!(!state.loading);
}

#[test]
fn log_ring_is_bounded() {
    let mut state = state_on(Route::Login);
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

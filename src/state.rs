use std::collections::VecDeque;

use crate::dashboard::render_dashboard;
use crate::document::Document;
use crate::fallback;
use crate::leaderboard::render_leaderboard;
use crate::login::LoginForm;
use crate::model::{Payload, Resource, resource_label};
use crate::route::Route;
use crate::theme::Theme;

/// What the active page is given at load time instead of reading ambient
/// globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub route: Route,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    Fetch { resource: Resource, load_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    /// Result of one fetch. `None` when the endpoint was unavailable or
    /// returned nothing.
    Loaded {
        resource: Resource,
        load_id: u64,
        payload: Option<Payload>,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub theme: Theme,
    pub document: Document,
    pub login: LoginForm,
    pub load_id: u64,
    pub loading: bool,
    pub help_overlay: bool,
    /// Developer console; hidden unless asked for.
    pub console_open: bool,
    pub logs: VecDeque<String>,
}

impl AppState {
    pub fn new(context: PageContext) -> Self {
        Self {
            document: page_document(&context.route),
            route: context.route,
            theme: context.theme,
            login: LoginForm::new(),
            load_id: 0,
            loading: false,
            help_overlay: false,
            console_open: false,
            logs: VecDeque::new(),
        }
    }

    /// Fresh page load: new document, new form, and the page's single fetch.
    pub fn navigate(&mut self, route: Route) -> Option<ProviderCommand> {
        self.document = page_document(&route);
        self.login = LoginForm::new();
        self.route = route;
        self.help_overlay = false;
        self.begin_load()
    }

    /// Fetches again for the current page and renders over the existing
    /// document.
    pub fn reload(&mut self) -> Option<ProviderCommand> {
        self.begin_load()
    }

    pub fn begin_load(&mut self) -> Option<ProviderCommand> {
        self.load_id = self.load_id.wrapping_add(1);
        let resource = self.route.resource();
        self.loading = resource.is_some();
        resource.map(|resource| ProviderCommand::Fetch {
            resource,
            load_id: self.load_id,
        })
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

pub fn page_document(route: &Route) -> Document {
    match route {
        Route::Login => Document::empty(),
        Route::Dashboard { name } => Document::dashboard(name),
        Route::Leaderboard => Document::leaderboard(),
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::Log(msg) => state.push_log(msg),
        Delta::Loaded {
            resource,
            load_id,
            payload,
        } => {
            if load_id != state.load_id || state.route.resource() != Some(resource) {
                state.push_log(format!(
                    "[INFO] Dropped stale {} result",
                    resource_label(resource)
                ));
                return;
            }
            state.loading = false;
            render_payload(&mut state.document, fallback::resolve(resource, payload));
        }
    }
}

pub fn render_payload(doc: &mut Document, payload: Payload) {
    match payload {
        Payload::Intern(profile) => render_dashboard(doc, &profile),
        Payload::Leaderboard(entries) => render_leaderboard(doc, &entries),
    }
}

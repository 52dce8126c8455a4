use reqwest::Url;

use crate::model::Resource;

// Only used to resolve relative paths; never contacted.
const PORTAL_ORIGIN: &str = "http://portal.local/";
/// Dashboard name used when `/dashboard` carries no `?name=`.
pub const DEFAULT_DASHBOARD_NAME: &str = "Praveen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard { name: String },
    Leaderboard,
}

impl Route {
    /// Unknown paths land on the login page.
    pub fn parse(path_and_query: &str) -> Self {
        let Ok(url) = Url::parse(PORTAL_ORIGIN).and_then(|base| base.join(path_and_query.trim()))
        else {
            return Route::Login;
        };
        match url.path().trim_end_matches('/') {
            "/dashboard" => {
                let name = url
                    .query_pairs()
                    .find(|(key, _)| key == "name")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_else(|| DEFAULT_DASHBOARD_NAME.to_string());
                Route::Dashboard { name }
            }
            "/leaderboard" => Route::Leaderboard,
            _ => Route::Login,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Leaderboard => "/leaderboard".to_string(),
            Route::Dashboard { name } => {
                let base = format!("{PORTAL_ORIGIN}dashboard");
                match Url::parse_with_params(&base, [("name", name.as_str())]) {
                    Ok(url) => format!("{}?{}", url.path(), url.query().unwrap_or_default()),
                    Err(_) => "/dashboard".to_string(),
                }
            }
        }
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            Route::Login => None,
            Route::Dashboard { .. } => Some(Resource::Intern),
            Route::Leaderboard => Some(Resource::Leaderboard),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "LOGIN",
            Route::Dashboard { .. } => "DASHBOARD",
            Route::Leaderboard => "LEADERBOARD",
        }
    }
}

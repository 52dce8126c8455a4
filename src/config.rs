use std::env;
use std::path::PathBuf;

use crate::model::Resource;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_INTERN_PATH: &str = "/api/intern";
const DEFAULT_LEADERBOARD_PATH: &str = "/api/leaderboard";
const PREFS_DIR: &str = "intern_portal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub base_url: String,
    pub intern_path: String,
    pub leaderboard_path: String,
    pub prefs_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            intern_path: DEFAULT_INTERN_PATH.to_string(),
            leaderboard_path: DEFAULT_LEADERBOARD_PATH.to_string(),
            prefs_dir: None,
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_or("PORTAL_BASE_URL", defaults.base_url),
            intern_path: env_or("PORTAL_INTERN_PATH", defaults.intern_path),
            leaderboard_path: env_or("PORTAL_LEADERBOARD_PATH", defaults.leaderboard_path),
            prefs_dir: env::var("PORTAL_PREFS_DIR")
                .ok()
                .and_then(non_empty)
                .map(PathBuf::from)
                .or_else(default_prefs_dir),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn resource_url(&self, resource: Resource) -> String {
        let path = match resource {
            Resource::Intern => &self.intern_path,
            Resource::Leaderboard => &self.leaderboard_path,
        };
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().and_then(non_empty).unwrap_or(default)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_prefs_dir() -> Option<PathBuf> {
    // Prefer XDG config.
    if let Ok(base) = env::var("XDG_CONFIG_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(PREFS_DIR));
        }
    }
    let home = env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".config").join(PREFS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_joins_without_double_slash() {
        let cfg = PortalConfig::with_base_url("http://localhost:5000/");
        assert_eq!(
            cfg.resource_url(Resource::Intern),
            "http://localhost:5000/api/intern"
        );
        assert_eq!(
            cfg.resource_url(Resource::Leaderboard),
            "http://localhost:5000/api/leaderboard"
        );
    }
}

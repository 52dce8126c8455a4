use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

const PREFS_FILE: &str = "prefs.json";
const PREFS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    pub version: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            version: PREFS_VERSION,
            theme: Theme::default(),
            user_email: None,
        }
    }
}

/// Small persisted flags, written through on every change.
///
/// Without a directory the store lives in memory only.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: Option<PathBuf>,
    prefs: Prefs,
}

impl LocalStore {
    pub fn open(dir: Option<&Path>) -> Self {
        let path = dir.map(|dir| dir.join(PREFS_FILE));
        let prefs = path
            .as_deref()
            .and_then(load_prefs_file)
            .unwrap_or_default();
        Self { path, prefs }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            prefs: Prefs::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn user_email(&self) -> Option<&str> {
        self.prefs.user_email.as_deref()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.prefs.theme = theme;
        self.save()
    }

    pub fn set_user_email(&mut self, email: &str) -> Result<()> {
        self.prefs.user_email = Some(email.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("create prefs dir")?;
        }
        let json = serde_json::to_string_pretty(&self.prefs).context("serialize prefs")?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write prefs")?;
        fs::rename(&tmp, path).context("swap prefs")?;
        Ok(())
    }
}

fn load_prefs_file(path: &Path) -> Option<Prefs> {
    let raw = fs::read_to_string(path).ok()?;
    let prefs = serde_json::from_str::<Prefs>(&raw).ok()?;
    if prefs.version != PREFS_VERSION {
        return None;
    }
    Some(prefs)
}

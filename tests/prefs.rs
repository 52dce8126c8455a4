use std::fs;
use std::path::PathBuf;
use std::process;

use intern_portal::persist::LocalStore;
use intern_portal::theme::Theme;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("intern_portal_{tag}_{}", process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn theme_defaults_to_light() {
    let dir = scratch_dir("default");
    let store = LocalStore::open(Some(dir.as_path()));
    assert_eq!(store.theme(), Theme::Light);
    assert!(store.user_email().is_none());
}

#[test]
fn theme_and_email_survive_reopen() {
    let dir = scratch_dir("reopen");
    let mut store = LocalStore::open(Some(dir.as_path()));
    store
        .set_theme(Theme::Light.toggled())
        .expect("theme should persist");
    store
        .set_user_email("anu@example.com")
        .expect("email should persist");

    let reopened = LocalStore::open(Some(dir.as_path()));
    assert_eq!(reopened.theme(), Theme::Dark);
    assert_eq!(reopened.user_email(), Some("anu@example.com"));

    let raw = fs::read_to_string(dir.join("prefs.json")).expect("prefs file written");
    assert!(raw.contains("\"dark\""));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).expect("scratch dir");
    fs::write(dir.join("prefs.json"), "{not json").expect("write junk");

    let store = LocalStore::open(Some(dir.as_path()));
    assert_eq!(store.theme(), Theme::Light);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn in_memory_store_toggles_without_disk() {
    let mut store = LocalStore::in_memory();
    store.set_theme(Theme::Dark).expect("in-memory save");
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn toggle_labels_name_the_other_theme() {
    assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
    assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
    assert!(Theme::Dark.toggle_class().contains("btn-outline-warning"));
    assert_eq!(Theme::Dark.toggled().as_str(), "light");
}

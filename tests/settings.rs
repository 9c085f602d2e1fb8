use kaffiy_dashboard::preferences::CARDS_STORAGE_KEY;
use kaffiy_dashboard::settings::Settings;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.cards_key, CARDS_STORAGE_KEY);
}

#[test]
fn partial_settings_use_defaults_for_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"premium": true, "debug_logging": true}"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert!(settings.premium);
    assert!(settings.debug_logging);
    assert_eq!(settings.storage_dir, "storage");
    assert_eq!(settings.trial_limit, 50);
}

#[test]
fn save_then_load_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        trial_used: 12,
        log_file: Some("dashboard.log".into()),
        ..Settings::default()
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn invalid_settings_are_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ premium: yes }").unwrap();
    assert!(Settings::load(&path).is_err());
}

#[test]
fn storage_dir_resolves_next_to_settings() {
    let settings = Settings::default();
    let resolved = settings.storage_path(Path::new("config/settings.json"));
    assert_eq!(resolved, Path::new("config").join("storage"));

    let bare = settings.storage_path(Path::new("settings.json"));
    assert_eq!(bare, Path::new("storage"));
}

//! Integration tests for SettingsManager and settings file handling
//!
//! These tests verify:
//! - Defaults when no settings file exists
//! - Loading a partial settings file
//! - Saving and loading settings
//! - Building a GameLayout from loaded settings

use camino::Utf8PathBuf;
use rimstart::{GameLayout, Settings, SettingsManager};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_load_defaults_without_file() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = SettingsManager::new(&config_path);

    let settings = manager.load_settings().unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_partial_settings_file() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = SettingsManager::new(&config_path);

    fs::write(
        manager.settings_path(),
        "rimworld_dir: /games/rimworld\nbackup_suffix: .previous\n",
    )
    .unwrap();

    let settings = manager.load_settings().unwrap();

    assert_eq!(settings.rimworld_dir, Some(Utf8PathBuf::from("/games/rimworld")));
    assert_eq!(settings.backup_suffix, ".previous");
    // Fields not in the file keep their defaults
    assert_eq!(settings.mod_list_extension, "rml");
    assert_eq!(settings.expansion_prefix, "ludeon.rimworld.");
}

#[test]
fn test_save_and_load_settings() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = SettingsManager::new(config_path.join("nested"));

    let settings = Settings {
        rimworld_dir: Some(Utf8PathBuf::from("/games/rw")),
        expansion_prefix: "ludeon.".to_string(),
        debug_mode: true,
        ..Settings::default()
    };
    manager.save_settings(&settings).unwrap();

    assert!(manager.settings_path().exists());
    assert_eq!(manager.load_settings().unwrap(), settings);
}

#[test]
fn test_invalid_settings_file_is_an_error() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = SettingsManager::new(&config_path);

    fs::write(manager.settings_path(), "debug_mode: [not, a, bool]\n").unwrap();

    assert!(manager.load_settings().is_err());
}

#[test]
fn test_layout_from_loaded_settings() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = SettingsManager::new(&config_path);
    fs::write(manager.settings_path(), "rimworld_dir: /games/rw\n").unwrap();

    let settings = manager.load_settings().unwrap();
    let layout = GameLayout::from_settings(&settings).unwrap();

    assert_eq!(
        layout.mods_config_path,
        Utf8PathBuf::from("/games/rw/Config/ModsConfig.xml")
    );
    assert_eq!(layout.mod_lists_dir, Utf8PathBuf::from("/games/rw/ModLists"));
}

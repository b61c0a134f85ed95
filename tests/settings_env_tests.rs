//! Environment layer of SettingsManager
//!
//! Kept in its own test binary with a single test so the `RIMSTART_*`
//! variables it sets cannot leak into other settings tests.

use camino::Utf8PathBuf;
use rimstart::{GameLayout, Settings, SettingsManager};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_environment_overrides_file_and_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = SettingsManager::new(&config_path);

    fs::write(
        manager.settings_path(),
        "rimworld_dir: /games/rimworld\nbackup_suffix: .previous\nmod_list_extension: xml\n",
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("RIMSTART_BACKUP_SUFFIX", Some(".envbak")),
            ("RIMSTART_DEBUG_MODE", Some("true")),
        ],
        || {
            let settings = manager.load_settings().unwrap();

            // File value replaced by the environment
            assert_eq!(settings.backup_suffix, ".envbak");
            // Default replaced by the environment
            assert!(settings.debug_mode);
            // File values without a variable survive
            assert_eq!(settings.rimworld_dir, Some(Utf8PathBuf::from("/games/rimworld")));
            assert_eq!(settings.mod_list_extension, "xml");
            assert_eq!(settings.expansion_prefix, Settings::default().expansion_prefix);

            let layout = GameLayout::from_settings(&settings).unwrap();
            assert_eq!(
                layout.backup_path,
                Utf8PathBuf::from("/games/rimworld/Config/ModsConfig.xml.envbak")
            );
        },
    );

    let settings = manager.load_settings().unwrap();
    assert_eq!(settings.backup_suffix, ".previous");
    assert!(!settings.debug_mode);
}

//! Integration tests for the full read → reconcile → switch workflow
//!
//! These tests verify:
//! - Match flags for saved mod lists against the active configuration
//! - Broken mod lists are skipped without failing the session
//! - Switching writes a backup and the chosen mod list
//! - Switching to the active mod list leaves the disk untouched

use camino::Utf8PathBuf;
use rimstart::services::{SelectionError, SwitchOutcome, current_presets};
use rimstart::session::SessionError;
use rimstart::{GameLayout, ModsConfig, Session, Settings};
use std::fs;
use tempfile::TempDir;

const ACTIVE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ModsConfigData>
  <version>1.4</version>
  <activeMods>
    <li>core</li>
    <li>ludeon.rimworld.royalty</li>
  </activeMods>
  <knownExpansions>
    <li>ludeon.rimworld.royalty</li>
  </knownExpansions>
</ModsConfigData>
"#;

fn rml(version: &str, ids: &[&str]) -> String {
    let items: String = ids.iter().map(|id| format!("      <li>{id}</li>\n")).collect();
    format!(
        "<savedModList>\n  <meta>\n    <gameVersion>{version}</gameVersion>\n  </meta>\n  <modList>\n    <ids>\n{items}    </ids>\n  </modList>\n</savedModList>\n"
    )
}

/// RimWorld data dir with the active config and mod lists "A" (current) and "B".
fn create_game_dir() -> (TempDir, GameLayout) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let layout = GameLayout::new(root, &Settings::default());

    fs::create_dir_all(layout.mods_config_path.parent().unwrap()).unwrap();
    fs::create_dir_all(&layout.mod_lists_dir).unwrap();
    fs::write(&layout.mods_config_path, ACTIVE).unwrap();
    fs::write(
        layout.mod_lists_dir.join("A.rml"),
        rml("1.4", &["core", "ludeon.rimworld.royalty"]),
    )
    .unwrap();
    fs::write(layout.mod_lists_dir.join("B.rml"), rml("1.4", &["core"])).unwrap();

    (temp_dir, layout)
}

fn status_of<'a>(session: &'a Session, name: &str) -> &'a rimstart::PresetStatus {
    session
        .statuses
        .iter()
        .find(|status| status.name() == name)
        .unwrap()
}

#[test]
fn test_match_flags() {
    let (_temp_dir, layout) = create_game_dir();

    let session = Session::open(layout).unwrap();

    assert_eq!(session.statuses.len(), 2);
    assert!(status_of(&session, "A").is_current);
    assert!(!status_of(&session, "B").is_current);
    assert_eq!(current_presets(&session.statuses).count(), 1);
}

#[test]
fn test_missing_active_config_is_fatal() {
    let (_temp_dir, layout) = create_game_dir();
    fs::remove_file(&layout.mods_config_path).unwrap();

    assert!(Session::open(layout).is_err());
}

#[test]
fn test_malformed_active_config_is_fatal() {
    let (_temp_dir, layout) = create_game_dir();
    fs::write(&layout.mods_config_path, "<ModsConfigData><version>1.4</version></ModsConfigData>").unwrap();

    assert!(Session::open(layout).is_err());
}

#[test]
fn test_broken_mod_list_is_skipped() {
    let (_temp_dir, layout) = create_game_dir();
    let broken = layout.mod_lists_dir.join("broken.rml");
    fs::write(&broken, "<savedModList><meta>").unwrap();

    let session = Session::open(layout).unwrap();

    assert_eq!(session.statuses.len(), 2);
    assert_eq!(session.skipped.len(), 1);
    assert_eq!(session.skipped[0].path(), broken.as_path());
}

#[test]
fn test_switch_to_other_mod_list() {
    let (_temp_dir, layout) = create_game_dir();
    let session = Session::open(layout.clone()).unwrap();

    let outcome = session.switch_by_name("B").unwrap();

    assert_eq!(
        outcome,
        SwitchOutcome::Switched {
            backup_path: layout.backup_path.clone()
        }
    );
    assert_eq!(fs::read_to_string(&layout.backup_path).unwrap(), ACTIVE);

    let written = fs::read_to_string(&layout.mods_config_path).unwrap();
    let expected = ModsConfig {
        version: "1.4".to_string(),
        active_mods: vec!["core".to_string()],
        known_expansions: Default::default(),
    };
    assert_eq!(ModsConfig::parse(&written).unwrap(), expected);

    // A fresh session now sees B as the active mod list
    let reopened = Session::open(layout).unwrap();
    assert!(status_of(&reopened, "B").is_current);
    assert!(!status_of(&reopened, "A").is_current);
}

#[test]
fn test_switch_to_current_leaves_files_alone() {
    let (_temp_dir, layout) = create_game_dir();
    let session = Session::open(layout.clone()).unwrap();

    let outcome = session.switch_by_name("A").unwrap();

    assert_eq!(outcome, SwitchOutcome::AlreadyCurrent);
    assert_eq!(fs::read_to_string(&layout.mods_config_path).unwrap(), ACTIVE);
    assert!(!layout.backup_path.exists());
}

#[test]
fn test_switch_to_unknown_name() {
    let (_temp_dir, layout) = create_game_dir();
    let session = Session::open(layout.clone()).unwrap();

    let error = session.switch_by_name("C").unwrap_err();

    assert!(matches!(
        error,
        SessionError::Selection(SelectionError::NotFound(ref name)) if name == "C"
    ));
    assert_eq!(fs::read_to_string(&layout.mods_config_path).unwrap(), ACTIVE);
}

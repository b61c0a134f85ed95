use crate::models::{ModsConfig, ParseError, require_child};
use crate::xml::{self, XmlElement};
use camino::Utf8PathBuf;
use std::time::SystemTime;

/// Root element of a saved mod list (`.rml`).
pub const MOD_LIST_ROOT: &str = "savedModList";

/// Contents of a saved mod list file.
///
/// Only the fields needed to rebuild `ModsConfig.xml` are read; the game also
/// stores Steam ids and display names, which are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModList {
    pub game_version: String,
    pub mod_ids: Vec<String>,
}

impl ModList {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let root = xml::parse_document(input)?;
        Self::from_element(&root)
    }

    /// Map a parsed `.rml` document. Requires `meta/gameVersion` and `modList/ids`.
    pub fn from_element(root: &XmlElement) -> Result<Self, ParseError> {
        if root.name != MOD_LIST_ROOT {
            return Err(ParseError::UnexpectedRoot {
                expected: MOD_LIST_ROOT,
                found: root.name.clone(),
            });
        }

        let meta = require_child(root, "meta")?;
        let game_version = require_child(meta, "gameVersion")?.text.clone();
        let mod_list = require_child(root, "modList")?;
        let mod_ids = require_child(mod_list, "ids")?.list_items();

        Ok(Self {
            game_version,
            mod_ids,
        })
    }

    /// Project this mod list onto the `ModsConfig` it would produce.
    ///
    /// Mod ids are copied in order. Ids starting with `expansion_prefix` are
    /// also recorded as known expansions, first occurrence wins.
    pub fn to_mods_config(&self, expansion_prefix: &str) -> ModsConfig {
        ModsConfig {
            version: self.game_version.clone(),
            active_mods: self.mod_ids.clone(),
            known_expansions: self
                .mod_ids
                .iter()
                .filter(|id| id.starts_with(expansion_prefix))
                .cloned()
                .collect(),
        }
    }
}

/// A mod list found on disk, with the record it normalizes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// File stem, shown to the user
    pub name: String,
    pub path: Utf8PathBuf,
    pub modified: Option<SystemTime>,
    pub mod_list: ModList,
    pub record: ModsConfig,
}

/// A preset together with whether it matches the active configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStatus {
    pub preset: Preset,
    pub is_current: bool,
}

impl PresetStatus {
    pub fn name(&self) -> &str {
        &self.preset.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<savedModList>
  <meta>
    <gameVersion>1.4.3901 rev1</gameVersion>
    <modIds>
      <li>ludeon.rimworld</li>
    </modIds>
    <modSteamIds>
      <li>0</li>
    </modSteamIds>
  </meta>
  <modList>
    <ids>
      <li>brrainz.harmony</li>
      <li>ludeon.rimworld</li>
      <li>ludeon.rimworld.royalty</li>
      <li>ludeon.rimworld.biotech</li>
    </ids>
    <names>
      <li>Harmony</li>
      <li>Core</li>
    </names>
  </modList>
</savedModList>
"#;

    #[test]
    fn test_parse_mod_list() {
        let list = ModList::parse(SAMPLE).unwrap();

        assert_eq!(list.game_version, "1.4.3901 rev1");
        assert_eq!(list.mod_ids.len(), 4);
        assert_eq!(list.mod_ids[0], "brrainz.harmony");
    }

    #[test]
    fn test_missing_ids_is_an_error() {
        let doc = "<savedModList><meta><gameVersion>1.4</gameVersion></meta><modList /></savedModList>";
        let error = ModList::parse(doc).unwrap_err();
        assert!(matches!(error, ParseError::MissingElement { ref parent, ref element } if parent == "modList" && element == "ids"));
    }

    #[test]
    fn test_missing_game_version_is_an_error() {
        let doc = "<savedModList><meta /><modList><ids /></modList></savedModList>";
        assert!(ModList::parse(doc).is_err());
    }

    #[test]
    fn test_to_mods_config_filters_expansions() {
        let list = ModList::parse(SAMPLE).unwrap();
        let config = list.to_mods_config("ludeon.rimworld.");

        assert_eq!(config.version, "1.4.3901 rev1");
        assert_eq!(config.active_mods, list.mod_ids);
        // The core id has no trailing dot and is not an expansion
        assert_eq!(
            config.known_expansions.iter().collect::<Vec<_>>(),
            vec!["ludeon.rimworld.royalty", "ludeon.rimworld.biotech"]
        );
    }

    #[test]
    fn test_to_mods_config_drops_duplicate_expansions() {
        let list = ModList {
            game_version: "1.4".to_string(),
            mod_ids: vec![
                "ludeon.rimworld.royalty".to_string(),
                "ludeon.rimworld.royalty".to_string(),
            ],
        };

        let config = list.to_mods_config("ludeon.rimworld.");
        assert_eq!(config.active_mods.len(), 2);
        assert_eq!(config.known_expansions.len(), 1);
    }
}

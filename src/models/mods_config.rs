use crate::models::{ParseError, require_child};
use crate::xml::{self, XmlElement, XmlError};
use indexmap::IndexSet;

/// Root element of `ModsConfig.xml`.
pub const MODS_CONFIG_ROOT: &str = "ModsConfigData";

/// The game's active mod selection, as stored in `Config/ModsConfig.xml`.
///
/// This is also the normalized shape every saved mod list is projected into
/// before comparison (see [`ModList::to_mods_config`](crate::models::ModList::to_mods_config)).
///
/// Equality follows the game's semantics:
/// - `version` must match exactly
/// - `active_mods` is a load order, so element order matters
/// - `known_expansions` is a set, so order does not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModsConfig {
    pub version: String,
    pub active_mods: Vec<String>,
    pub known_expansions: IndexSet<String>,
}

impl ModsConfig {
    /// Parse the text of a `ModsConfig.xml` file.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let root = xml::parse_document(input)?;
        Self::from_element(&root)
    }

    /// Map a parsed document onto a `ModsConfig`.
    ///
    /// `version` and `activeMods` are required. A missing `knownExpansions`
    /// element is read as an empty set. Unknown elements are ignored.
    pub fn from_element(root: &XmlElement) -> Result<Self, ParseError> {
        if root.name != MODS_CONFIG_ROOT {
            return Err(ParseError::UnexpectedRoot {
                expected: MODS_CONFIG_ROOT,
                found: root.name.clone(),
            });
        }

        let version = require_child(root, "version")?.text.clone();
        let active_mods = require_child(root, "activeMods")?.list_items();
        let known_expansions = root
            .child("knownExpansions")
            .map(|element| element.list_items().into_iter().collect())
            .unwrap_or_default();

        Ok(Self {
            version,
            active_mods,
            known_expansions,
        })
    }

    pub fn to_element(&self) -> XmlElement {
        let mut root = XmlElement::new(MODS_CONFIG_ROOT);
        root.push(XmlElement::with_text("version", self.version.as_str()));
        root.push(XmlElement::list("activeMods", self.active_mods.iter().cloned()));
        root.push(XmlElement::list(
            "knownExpansions",
            self.known_expansions.iter().cloned(),
        ));
        root
    }

    /// Serialize to the `ModsConfig.xml` file format.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        xml::write_document(&self.to_element())
    }
}

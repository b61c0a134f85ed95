//! Data models for RimWorld's mod configuration files.
//!
//! - [`ModsConfig`]: the active mod selection from `Config/ModsConfig.xml`, and the
//!   normalized record every saved mod list is compared in
//! - [`ModList`]: a saved mod list (`ModLists/*.rml`)
//! - [`Preset`] / [`PresetStatus`]: a mod list found on disk and its match flag
//!
//! Documents are parsed into an [`XmlElement`](crate::xml::XmlElement) tree first and
//! then mapped with explicit presence checks, so a missing element is reported
//! by name instead of being silently defaulted.

pub mod mod_list;
pub mod mods_config;

pub use mod_list::{ModList, Preset, PresetStatus};
pub use mods_config::ModsConfig;

use crate::xml::{XmlElement, XmlError};
use thiserror::Error;

/// Errors raised while mapping a document onto a model
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Xml(#[from] XmlError),

    #[error("Expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("Missing required element <{element}> in <{parent}>")]
    MissingElement { parent: String, element: String },
}

pub(crate) fn require_child<'a>(
    parent: &'a XmlElement,
    name: &str,
) -> Result<&'a XmlElement, ParseError> {
    parent.child(name).ok_or_else(|| ParseError::MissingElement {
        parent: parent.name.clone(),
        element: name.to_string(),
    })
}

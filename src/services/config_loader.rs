use crate::models::{ModsConfig, ParseError};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// Errors that can occur while reading a game file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

pub(crate) fn read_file(path: &Utf8Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the active `ModsConfig.xml`.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, is not well-formed XML, or lacks
/// `version` or `activeMods`.
pub fn load_mods_config(path: &Utf8Path) -> Result<ModsConfig, LoadError> {
    let contents = read_file(path)?;
    let config = ModsConfig::parse(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded active config from {} ({} mods, version {})",
        path,
        config.active_mods.len(),
        config.version
    );
    tracing::trace!("Active config: {:?}", config);
    Ok(config)
}

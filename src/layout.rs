//! Location of RimWorld's user data and the files this tool touches inside it.
//!
//! ```text
//! <rimworld dir>/
//!   Config/ModsConfig.xml        active configuration
//!   Config/ModsConfig.xml.bak    previous configuration (after a switch)
//!   ModLists/**/*.rml            saved mod lists
//! ```

use crate::settings::Settings;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_DIR_NAME: &str = "Config";
pub const MODS_CONFIG_FILE_NAME: &str = "ModsConfig.xml";
pub const MOD_LISTS_DIR_NAME: &str = "ModLists";

const STUDIO_DIR_NAME: &str = "Ludeon Studios";
const GAME_DIR_NAME: &str = "RimWorld by Ludeon Studios";

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("RimWorld data directory detection is not supported on {0}; set `rimworld_dir` explicitly")]
    UnsupportedPlatform(&'static str),

    #[error("Could not determine the user's home or config directory")]
    NoBaseDirectory,

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("`backup_suffix` is empty; the backup would overwrite {0}")]
    EmptyBackupSuffix(Utf8PathBuf),
}

/// Every path and naming rule needed by the loaders and the switcher.
///
/// Built once at startup from [`Settings`] and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLayout {
    pub root: Utf8PathBuf,
    pub mods_config_path: Utf8PathBuf,
    pub backup_path: Utf8PathBuf,
    pub mod_lists_dir: Utf8PathBuf,
    /// Extension of saved mod lists, without the dot
    pub mod_list_extension: String,
    /// Prefix identifying official expansions (e.g. `ludeon.rimworld.`)
    pub expansion_prefix: String,
}

impl GameLayout {
    /// Lay out the RimWorld files under `root` using the naming rules in `settings`.
    pub fn new(root: impl Into<Utf8PathBuf>, settings: &Settings) -> Self {
        let root = root.into();
        let mods_config_path = root.join(CONFIG_DIR_NAME).join(MODS_CONFIG_FILE_NAME);
        let backup_path = Utf8PathBuf::from(format!("{}{}", mods_config_path, settings.backup_suffix));

        Self {
            mod_lists_dir: root.join(MOD_LISTS_DIR_NAME),
            mods_config_path,
            backup_path,
            mod_list_extension: settings.mod_list_extension.trim_start_matches('.').to_string(),
            expansion_prefix: settings.expansion_prefix.clone(),
            root,
        }
    }

    /// Use `settings.rimworld_dir` if set, otherwise the platform default.
    ///
    /// # Errors
    ///
    /// Fails if no directory can be determined, or if `backup_suffix` is empty
    /// so the backup would land on the active configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self, LayoutError> {
        let root = match &settings.rimworld_dir {
            Some(dir) => dir.clone(),
            None => default_rimworld_dir()?,
        };
        tracing::debug!("Using RimWorld data directory: {}", root);

        let layout = Self::new(root, settings);
        if settings.backup_suffix.is_empty() {
            return Err(LayoutError::EmptyBackupSuffix(layout.mods_config_path));
        }
        Ok(layout)
    }

    /// Whether `path` has the saved mod list extension (ASCII case-insensitive).
    pub fn is_mod_list(&self, path: &Utf8Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.mod_list_extension))
    }
}

/// RimWorld's user data directory for the current platform.
///
/// - Windows: `%USERPROFILE%\AppData\LocalLow\Ludeon Studios\RimWorld by Ludeon Studios`
/// - Linux: `$XDG_CONFIG_HOME/unity3d/Ludeon Studios/RimWorld by Ludeon Studios`
/// - macOS: not supported
pub fn default_rimworld_dir() -> Result<Utf8PathBuf, LayoutError> {
    let dir = platform_rimworld_dir()?;
    Utf8PathBuf::from_path_buf(dir).map_err(LayoutError::NonUtf8Path)
}

#[cfg(target_os = "windows")]
fn platform_rimworld_dir() -> Result<PathBuf, LayoutError> {
    let home = dirs::home_dir().ok_or(LayoutError::NoBaseDirectory)?;
    Ok(home
        .join("AppData")
        .join("LocalLow")
        .join(STUDIO_DIR_NAME)
        .join(GAME_DIR_NAME))
}

#[cfg(target_os = "macos")]
fn platform_rimworld_dir() -> Result<PathBuf, LayoutError> {
    Err(LayoutError::UnsupportedPlatform("macOS"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_rimworld_dir() -> Result<PathBuf, LayoutError> {
    let config = dirs::config_dir().ok_or(LayoutError::NoBaseDirectory)?;
    Ok(config.join("unity3d").join(STUDIO_DIR_NAME).join(GAME_DIR_NAME))
}

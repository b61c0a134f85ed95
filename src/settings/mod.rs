use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "rimstart.yaml";

/// Prefix of environment variables overriding settings (`RIMSTART_DEBUG_MODE=true`).
pub const ENV_PREFIX: &str = "RIMSTART";

/// User settings from `rimstart.yaml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RimWorld user data directory. Detected from the platform when unset.
    pub rimworld_dir: Option<Utf8PathBuf>,

    pub mod_list_extension: String,

    /// Mod ids starting with this prefix are official expansions
    pub expansion_prefix: String,

    /// Appended to `ModsConfig.xml` to name the backup
    pub backup_suffix: String,

    pub debug_mode: bool,

    /// Where rotating log files go. Defaults to `<config dir>/logs`.
    pub log_dir: Option<Utf8PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rimworld_dir: None,
            mod_list_extension: "rml".to_string(),
            expansion_prefix: "ludeon.rimworld.".to_string(),
            backup_suffix: ".bak".to_string(),
            debug_mode: false,
            log_dir: None,
        }
    }
}

/// Loads and saves [`Settings`].
///
/// Loading layers, lowest priority first:
/// 1. built-in defaults
/// 2. `<config dir>/rimstart.yaml`, if present
/// 3. `RIMSTART_*` environment variables
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl SettingsManager {
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();
        Self {
            settings_path: config_dir.join(SETTINGS_FILE_NAME),
            config_dir,
        }
    }

    /// The per-user config directory (`~/.config/rimstart` on Linux).
    pub fn default_config_dir() -> Option<Utf8PathBuf> {
        let dir = dirs::config_dir()?.join(crate::APP_NAME);
        Utf8PathBuf::from_path_buf(dir).ok()
    }

    /// Layer defaults, the settings file and the environment.
    ///
    /// Runs before logging is set up, so nothing is logged here.
    pub fn load_settings(&self) -> Result<Settings> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::new(self.settings_path.as_str(), ::config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?
            .try_deserialize::<Settings>()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        Ok(settings)
    }

    /// Write `settings` as YAML, creating the config directory if needed.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).with_context(|| {
                format!("Failed to create config directory: {}", self.config_dir)
            })?;
        }

        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }

    /// Log directory from `settings`, or `<config dir>/logs`.
    pub fn log_dir(&self, settings: &Settings) -> Utf8PathBuf {
        settings
            .log_dir
            .clone()
            .unwrap_or_else(|| self.config_dir.join("logs"))
    }
}

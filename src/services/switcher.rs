use crate::layout::GameLayout;
use crate::models::{ModsConfig, Preset};
use crate::services::reconciler::is_current;
use crate::xml::XmlError;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

/// What a switch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The preset was already active; nothing was touched
    AlreadyCurrent,
    /// The previous configuration was moved to `backup_path` and replaced
    Switched { backup_path: Utf8PathBuf },
}

/// Errors that can occur while switching mod lists
#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Failed to serialize mod list '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: XmlError,
    },

    #[error("Failed to back up {path} to {backup_path}: {source}")]
    Backup {
        path: Utf8PathBuf,
        backup_path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup path {0} is the active config itself; set a non-empty backup suffix")]
    BackupIsActive(Utf8PathBuf),

    #[error("Failed to write {path}: {source} (previous config restored)")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to write {path}: {source}; restoring the backup also failed ({restore_error}), previous config is at {backup_path}"
    )]
    WriteUnrecovered {
        path: Utf8PathBuf,
        backup_path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
        restore_error: std::io::Error,
    },
}

/// Make `preset` the active mod configuration.
///
/// If the preset already matches `active` this is a no-op. Otherwise the
/// current `ModsConfig.xml` is renamed to the backup path (replacing any older
/// backup) and the preset's record is written in its place.
///
/// The new document is serialized before anything on disk changes. If writing
/// fails after the rename, the backup is moved back.
pub fn switch_to(
    layout: &GameLayout,
    active: &ModsConfig,
    preset: &Preset,
) -> Result<SwitchOutcome, SwitchError> {
    if layout.backup_path == layout.mods_config_path {
        return Err(SwitchError::BackupIsActive(layout.backup_path.clone()));
    }

    if is_current(active, preset) {
        tracing::info!("Mod list '{}' is already active", preset.name);
        return Ok(SwitchOutcome::AlreadyCurrent);
    }

    tracing::info!("Switching mod list to '{}'", preset.name);

    let document = preset
        .record
        .to_xml()
        .map_err(|source| SwitchError::Serialize {
            name: preset.name.clone(),
            source,
        })?;

    let path = &layout.mods_config_path;
    let backup_path = &layout.backup_path;

    replace_with_backup(path, backup_path, |target| fs::write(target, &document))?;

    tracing::info!(
        "Wrote {} ({} mods) to {}",
        preset.name,
        preset.record.active_mods.len(),
        path
    );

    Ok(SwitchOutcome::Switched {
        backup_path: backup_path.clone(),
    })
}

/// Move `path` to `backup_path`, then create a new `path` with `write`.
///
/// If `write` fails, the backup is renamed back over whatever `write` left at
/// `path`.
pub fn replace_with_backup<F>(
    path: &Utf8Path,
    backup_path: &Utf8Path,
    write: F,
) -> Result<(), SwitchError>
where
    F: FnOnce(&Utf8Path) -> io::Result<()>,
{
    if path == backup_path {
        return Err(SwitchError::BackupIsActive(backup_path.to_path_buf()));
    }

    fs::rename(path, backup_path).map_err(|source| SwitchError::Backup {
        path: path.to_path_buf(),
        backup_path: backup_path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Backed up {} to {}", path, backup_path);

    if let Err(source) = write(path) {
        tracing::error!("Failed to write {}: {}", path, source);
        return Err(match fs::rename(backup_path, path) {
            Ok(()) => SwitchError::Write {
                path: path.to_path_buf(),
                source,
            },
            Err(restore_error) => SwitchError::WriteUnrecovered {
                path: path.to_path_buf(),
                backup_path: backup_path.to_path_buf(),
                source,
                restore_error,
            },
        });
    }

    Ok(())
}

//! Everything read at startup, before the user is asked to choose.

use crate::layout::GameLayout;
use crate::models::{ModsConfig, PresetStatus};
use crate::services::{self, LoadError, SelectionError, SwitchError, SwitchOutcome};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Switch(#[from] SwitchError),
}

/// The active configuration and every saved mod list, already reconciled.
#[derive(Debug)]
pub struct Session {
    pub layout: GameLayout,
    pub active: ModsConfig,
    pub statuses: Vec<PresetStatus>,
    /// Mod list files that failed to load
    pub skipped: Vec<LoadError>,
}

impl Session {
    /// Load the active configuration and scan the mod lists.
    ///
    /// # Errors
    ///
    /// Fails only if `ModsConfig.xml` cannot be loaded; broken mod lists end up
    /// in [`Session::skipped`].
    pub fn open(layout: GameLayout) -> Result<Self, LoadError> {
        let active = services::load_mods_config(&layout.mods_config_path)?;
        let scan = services::scan_mod_lists(&layout);
        let statuses = services::reconcile(&active, scan.presets);

        Ok(Self {
            layout,
            active,
            statuses,
            skipped: scan.skipped,
        })
    }

    /// Select the mod list called `name` and make it active.
    ///
    /// The session keeps the configuration it was opened with; open a new one
    /// to see the result.
    pub fn switch_by_name(&self, name: &str) -> Result<SwitchOutcome, SessionError> {
        let status = services::select_preset(&self.statuses, name)?;
        Ok(services::switch_to(&self.layout, &self.active, &status.preset)?)
    }
}

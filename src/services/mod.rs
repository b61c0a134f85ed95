//! Services module - the mod list reconciliation logic.
//!
//! The services are framework-agnostic: they take a [`GameLayout`](crate::layout::GameLayout)
//! and plain data, and have no dependency on the command line front end.
//!
//! # Components
//!
//! - [`load_mods_config`]: read and validate the active `ModsConfig.xml`
//! - [`scan_mod_lists`]: find saved mod lists, skipping (and reporting) broken ones
//! - [`reconcile`]: flag which mod lists match the active configuration
//! - [`select_preset`]: resolve a user's choice to one mod list
//! - [`switch_to`]: back up `ModsConfig.xml` and replace it with a mod list
//!
//! # Usage Example
//!
//! ```ignore
//! use rimstart::services::{load_mods_config, reconcile, scan_mod_lists, select_preset, switch_to};
//!
//! let active = load_mods_config(&layout.mods_config_path)?;
//! let scan = scan_mod_lists(&layout);
//! let statuses = reconcile(&active, scan.presets);
//!
//! let chosen = select_preset(&statuses, "Royalty Run")?;
//! switch_to(&layout, &active, &chosen.preset)?;
//! ```
//!
//! Everything runs synchronously on the calling thread. The switch assumes
//! nothing else writes `ModsConfig.xml` meanwhile (the game should be closed).

pub mod config_loader;
pub mod preset_loader;
pub mod reconciler;
pub mod selection;
pub mod switcher;

pub use config_loader::{LoadError, load_mods_config};
pub use preset_loader::{PresetScan, load_preset, scan_mod_lists};
pub use reconciler::{current_presets, is_current, reconcile};
pub use selection::{SelectionError, default_selection, select_preset};
pub use switcher::{SwitchError, SwitchOutcome, replace_with_backup, switch_to};

// RimStart - switch between saved RimWorld mod lists
//
// This is the library crate containing the reconciliation logic and data structures.
// The binary crate (main.rs) provides the command line entry point.

pub mod cli;
pub mod layout;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod settings;
pub mod xml;

// Re-export commonly used types for convenience
pub use layout::GameLayout;
pub use models::{ModList, ModsConfig, Preset, PresetStatus};
pub use session::Session;
pub use settings::{Settings, SettingsManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

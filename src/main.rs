//! RimStart - switch between saved RimWorld mod lists
//!
//! Main entry point for the command line application.
//!
//! # Execution Flow
//!
//! 1. Parse the command line
//! 2. Load settings: defaults, then `rimstart.yaml`, then `RIMSTART_*`
//!    environment variables, then command line flags
//! 3. Initialize logging → `<config dir>/logs/rimstart.<date>`
//! 4. Read `Config/ModsConfig.xml` and every `ModLists/*.rml`, flag the
//!    mod lists matching the active configuration
//! 5. Run the command (`list`, `switch`, `pick` or `settings`)
//!
//! Launching the game afterwards is left to the user.

use anyhow::{Context, Result};
use clap::Parser;
use rimstart::cli::Cli;
use rimstart::{APP_NAME, SettingsManager, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => SettingsManager::default_config_dir()
            .context("Could not determine the config directory; pass --config-dir")?,
    };
    let manager = SettingsManager::new(&config_dir);

    let mut settings = manager.load_settings()?;
    cli.apply_overrides(&mut settings);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = rimstart::logging::init_logging(
        &manager.log_dir(&settings),
        APP_NAME,
        settings.debug_mode,
        !cli.quiet,
    )?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);
    if manager.settings_path().exists() {
        tracing::debug!("Loaded settings from {}", manager.settings_path());
    } else {
        tracing::debug!(
            "Settings file not found at {}, using defaults",
            manager.settings_path()
        );
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let result = rimstart::cli::run(&cli, &settings, &manager);
    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

//! Command line front end.
//!
//! Replaces the mod list window: `list` shows one line per saved mod list with
//! the active one marked, `switch` and `pick` select one and make it active.

pub mod commands;

pub use commands::run;

use crate::settings::Settings;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rimstart")]
#[command(author, version)]
#[command(about = "Switch between saved RimWorld mod lists", long_about = None)]
pub struct Cli {
    /// RimWorld user data directory (the one holding Config/ and ModLists/).
    #[arg(long, global = true)]
    pub rimworld_dir: Option<Utf8PathBuf>,

    /// Directory holding rimstart.yaml.
    #[arg(long, global = true)]
    pub config_dir: Option<Utf8PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    pub debug: bool,

    /// Only write logs to the log file, not the terminal.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List saved mod lists, marking the active one (default).
    List,
    /// Make the named mod list active.
    Switch(Switch),
    /// Choose a mod list interactively.
    Pick,
    /// Works with the rimstart settings file.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    /// Name of the mod list (file name without extension).
    pub name: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Print the effective settings as YAML.
    Show,
    /// Write a settings file with the default values.
    Init {
        /// Overwrite an existing settings file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Apply command line flags on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(dir) = &self.rimworld_dir {
            settings.rimworld_dir = Some(dir.clone());
        }
        if self.debug {
            settings.debug_mode = true;
        }
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}

use crate::cli::{Cli, Commands, SettingsCommand};
use crate::layout::GameLayout;
use crate::models::PresetStatus;
use crate::services::{self, SwitchOutcome};
use crate::session::Session;
use crate::settings::{Settings, SettingsManager};
use anyhow::{Context, Result, bail};

/// Run the command selected on the command line.
pub fn run(cli: &Cli, settings: &Settings, manager: &SettingsManager) -> Result<()> {
    match cli.command() {
        Commands::List => list(&open_session(settings)?),
        Commands::Switch(args) => switch(&open_session(settings)?, &args.name),
        Commands::Pick => pick(&open_session(settings)?),
        Commands::Settings(SettingsCommand::Show) => show_settings(settings),
        Commands::Settings(SettingsCommand::Init { force }) => init_settings(manager, force),
    }
}

fn open_session(settings: &Settings) -> Result<Session> {
    let layout = GameLayout::from_settings(settings)?;
    let config_path = layout.mods_config_path.clone();
    Session::open(layout)
        .with_context(|| format!("Cannot load the active mod configuration at {}", config_path))
}

fn list(session: &Session) -> Result<()> {
    if session.statuses.is_empty() {
        println!("No mod lists found in {}", session.layout.mod_lists_dir);
        return Ok(());
    }

    print!("{}", format_listing(&session.statuses));
    Ok(())
}

fn switch(session: &Session, name: &str) -> Result<()> {
    let outcome = session.switch_by_name(name)?;
    println!("{}", describe_outcome(name, &outcome));
    Ok(())
}

fn pick(session: &Session) -> Result<()> {
    if session.statuses.is_empty() {
        bail!("No mod lists found in {}", session.layout.mod_lists_dir);
    }

    let names: Vec<&str> = session.statuses.iter().map(PresetStatus::name).collect();
    let mut select = dialoguer::Select::new()
        .with_prompt("Mod list")
        .items(&names);
    if let Some(index) = services::default_selection(&session.statuses) {
        select = select.default(index);
    }

    let Some(index) = select.interact_opt().context("Mod list prompt failed")? else {
        tracing::info!("No mod list chosen");
        return Ok(());
    };

    let status = &session.statuses[index];
    let outcome = services::switch_to(&session.layout, &session.active, &status.preset)?;
    println!("{}", describe_outcome(status.name(), &outcome));
    Ok(())
}

fn show_settings(settings: &Settings) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(settings).context("Failed to serialize settings")?;
    print!("{}", yaml);
    Ok(())
}

fn init_settings(manager: &SettingsManager, force: bool) -> Result<()> {
    if manager.settings_path().exists() && !force {
        bail!(
            "Settings file already exists at {} (use --force to overwrite)",
            manager.settings_path()
        );
    }

    manager.save_settings(&Settings::default())?;
    println!("Wrote {}", manager.settings_path());
    Ok(())
}

/// One line per mod list, `*` marking those matching the active configuration.
pub fn format_listing(statuses: &[PresetStatus]) -> String {
    statuses
        .iter()
        .map(|status| {
            let marker = if status.is_current { '*' } else { ' ' };
            format!("{} {}\n", marker, status.name())
        })
        .collect()
}

pub fn describe_outcome(name: &str, outcome: &SwitchOutcome) -> String {
    match outcome {
        SwitchOutcome::AlreadyCurrent => format!("'{}' is already the active mod list", name),
        SwitchOutcome::Switched { backup_path } => format!(
            "Switched to '{}' (previous configuration saved to {})",
            name, backup_path
        ),
    }
}

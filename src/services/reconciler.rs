use crate::models::{ModsConfig, Preset, PresetStatus};

/// Whether `preset` would leave the game with exactly the `active` configuration.
pub fn is_current(active: &ModsConfig, preset: &Preset) -> bool {
    preset.record == *active
}

/// Flag every preset that matches the active configuration.
///
/// Any number of presets may match, including none. Order is preserved.
pub fn reconcile(active: &ModsConfig, presets: Vec<Preset>) -> Vec<PresetStatus> {
    presets
        .into_iter()
        .map(|preset| {
            let is_current = is_current(active, &preset);
            tracing::debug!("Mod list '{}' is current: {}", preset.name, is_current);
            PresetStatus { preset, is_current }
        })
        .collect()
}

pub fn current_presets(statuses: &[PresetStatus]) -> impl Iterator<Item = &PresetStatus> {
    statuses.iter().filter(|status| status.is_current)
}

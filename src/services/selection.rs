use crate::models::PresetStatus;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No mod list named '{0}'")]
    NotFound(String),

    #[error("{count} mod lists match '{name}'")]
    Ambiguous { name: String, count: usize },
}

/// Pick the preset the user asked for by name.
///
/// An exact name match wins. Otherwise a single case-insensitive match is
/// accepted. Selection never touches the disk; pass the result to
/// [`switch_to`](crate::services::switch_to).
pub fn select_preset<'a>(
    statuses: &'a [PresetStatus],
    name: &str,
) -> Result<&'a PresetStatus, SelectionError> {
    let exact: Vec<_> = statuses.iter().filter(|s| s.name() == name).collect();
    let candidates = if exact.is_empty() {
        statuses
            .iter()
            .filter(|s| s.name().eq_ignore_ascii_case(name))
            .collect()
    } else {
        exact
    };

    match candidates.as_slice() {
        [] => Err(SelectionError::NotFound(name.to_string())),
        [status] => Ok(*status),
        _ => Err(SelectionError::Ambiguous {
            name: name.to_string(),
            count: candidates.len(),
        }),
    }
}

/// Index of the entry to highlight first: the first current preset.
pub fn default_selection(statuses: &[PresetStatus]) -> Option<usize> {
    statuses.iter().position(|status| status.is_current)
}

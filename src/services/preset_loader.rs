use crate::layout::GameLayout;
use crate::models::{ModList, Preset};
use crate::services::config_loader::{LoadError, read_file};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use walkdir::WalkDir;

/// Result of scanning the mod list directory.
#[derive(Debug, Default)]
pub struct PresetScan {
    /// Parsed mod lists, most recently modified first
    pub presets: Vec<Preset>,
    /// Mod list files that could not be read, with the reason
    pub skipped: Vec<LoadError>,
}

/// Load a single saved mod list and derive its normalized record.
pub fn load_preset(path: &Utf8Path, expansion_prefix: &str) -> Result<Preset, LoadError> {
    let contents = read_file(path)?;
    let mod_list = ModList::parse(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path.file_stem().unwrap_or(path.as_str()).to_string();
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok();
    let record = mod_list.to_mods_config(expansion_prefix);

    tracing::trace!("Mod list '{}': {:?}", name, mod_list);

    Ok(Preset {
        name,
        path: path.to_path_buf(),
        modified,
        mod_list,
        record,
    })
}

/// Scan `layout.mod_lists_dir` (recursively) for saved mod lists.
///
/// A file that fails to load is logged and reported in [`PresetScan::skipped`];
/// it does not abort the scan. A missing directory gives an empty scan.
pub fn scan_mod_lists(layout: &GameLayout) -> PresetScan {
    let dir = &layout.mod_lists_dir;
    let mut scan = PresetScan::default();

    if !dir.is_dir() {
        tracing::warn!("Mod list directory not found: {}", dir);
        return scan;
    }

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => path,
            Err(path) => {
                tracing::warn!("Skipping non UTF-8 path: {}", path.display());
                continue;
            }
        };

        if !layout.is_mod_list(&path) {
            continue;
        }

        match load_preset(&path, &layout.expansion_prefix) {
            Ok(preset) => {
                tracing::debug!("Found mod list '{}' at {}", preset.name, path);
                scan.presets.push(preset);
            }
            Err(e) => {
                tracing::warn!("Skipping mod list: {}", e);
                scan.skipped.push(e);
            }
        }
    }

    scan.presets.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.name.cmp(&b.name))
    });

    tracing::info!(
        "Found {} mod lists in {} ({} skipped)",
        scan.presets.len(),
        dir,
        scan.skipped.len()
    );

    scan
}

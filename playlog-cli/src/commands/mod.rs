pub(crate) mod annotate;
pub(crate) mod config;
pub(crate) mod gog;
pub(crate) mod merge;
pub(crate) mod process;

use std::path::Path;

use playlog_catalog::{GameMap, load_entries};
use playlog_merge::{Diagnostics, Severity, TitlePolicy, key_by_title};
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Forward stage diagnostics to the log at their severity.
pub(crate) fn report_diagnostics(diagnostics: &Diagnostics) {
    for event in diagnostics.events() {
        match event.severity() {
            Severity::Warning => log::warn!("{}", event),
            Severity::Info => log::info!("{}", event),
        }
    }
}

/// Load a snapshot whose titles must be unique.
pub(crate) fn load_unique<T: DeserializeOwned>(path: &Path) -> Result<GameMap<T>, CliError> {
    let entries = load_entries(path)?;
    let (games, _) = key_by_title(entries, &path.display().to_string(), TitlePolicy::Unique)?;
    log::debug!("Loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

//! JSON snapshot loading and writing.
//!
//! Snapshots are lists of flat objects, each carrying its title in a `game`
//! field. Loading keeps the list form ([`GameEntry`]) so callers can check
//! for duplicate titles before keying; writing takes a [`GameMap`] and puts
//! the key back as `game`.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::GameMap;

/// One snapshot element: the title plus the remaining fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry<T> {
    pub game: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> GameEntry<T> {
    pub fn new(game: impl Into<String>, data: T) -> Self {
        Self {
            game: game.into(),
            data,
        }
    }
}

/// Borrowed form used when writing, so maps need not be cloned.
#[derive(Serialize)]
struct GameEntryRef<'a, T> {
    game: &'a str,
    #[serde(flatten)]
    data: &'a T,
}

/// Output formatting for written snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Parse snapshot text. `source` names the input in error messages.
pub fn parse_entries<T: DeserializeOwned>(
    contents: &str,
    source: &str,
) -> Result<Vec<GameEntry<T>>, CatalogError> {
    serde_json::from_str(contents).map_err(|e| CatalogError::Parse {
        path: source.to_string(),
        source: e,
    })
}

/// Load a snapshot file as a list of entries, in file order.
pub fn load_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<GameEntry<T>>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_entries(&contents, &path.display().to_string())
}

/// Key entries by title without any uniqueness check; a later entry
/// replaces an earlier one with the same title.
pub fn entries_to_map<T>(entries: Vec<GameEntry<T>>) -> GameMap<T> {
    entries.into_iter().map(|e| (e.game, e.data)).collect()
}

/// Write a title-keyed map as a snapshot list.
///
/// The file is written to a sibling temporary path and renamed into place,
/// so a failed write never leaves a truncated snapshot behind.
pub fn write_games<T: Serialize>(
    path: &Path,
    games: &GameMap<T>,
    style: JsonStyle,
) -> Result<(), CatalogError> {
    let io_err = |e: std::io::Error| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    };

    let entries: Vec<GameEntryRef<'_, T>> = games
        .iter()
        .map(|(game, data)| GameEntryRef { game, data })
        .collect();
    let serialized = match style {
        JsonStyle::Compact => serde_json::to_string(&entries),
        JsonStyle::Pretty => serde_json::to_string_pretty(&entries),
    }
    .map_err(|e| CatalogError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serialized).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;

    Ok(())
}

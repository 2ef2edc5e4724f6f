//! Source record normalization.
//!
//! Turns a loaded snapshot list into a title-keyed map, validating the
//! uniqueness guarantees each kind of source makes.

use std::collections::{BTreeMap, BTreeSet};

use playlog_catalog::{GameEntry, GameMap, PlatformRecord};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MergeError;

/// What to do when a source lists the same title more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Duplicate titles are a data integrity error.
    Unique,
    /// The later row replaces the earlier one, with a warning.
    LastWins,
}

/// Fail if any title appears more than once in `entries`.
///
/// `input` names the source in the error.
pub fn ensure_unique_titles<T>(entries: &[GameEntry<T>], input: &str) -> Result<(), MergeError> {
    let mut seen = BTreeSet::new();
    let duplicates: BTreeSet<&str> = entries
        .iter()
        .map(|e| e.game.as_str())
        .filter(|title| !seen.insert(*title))
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(MergeError::DuplicateTitles {
            input: input.to_string(),
            titles: duplicates.into_iter().map(str::to_string).collect(),
        })
    }
}

/// Key a snapshot list by title.
///
/// `input` names the source in errors and diagnostics.
pub fn key_by_title<T>(
    entries: Vec<GameEntry<T>>,
    input: &str,
    policy: TitlePolicy,
) -> Result<(GameMap<T>, Diagnostics), MergeError> {
    if policy == TitlePolicy::Unique {
        ensure_unique_titles(&entries, input)?;
    }

    let mut diagnostics = Diagnostics::new();
    let mut games = GameMap::new();
    for entry in entries {
        if games.contains_key(&entry.game) {
            diagnostics.push(Diagnostic::DuplicateTitle {
                input: input.to_string(),
                title: entry.game.clone(),
            });
        }
        games.insert(entry.game, entry.data);
    }

    Ok((games, diagnostics))
}

/// Normalize one platform's batch of play records.
///
/// External ids must be pairwise distinct and hours must be non-negative;
/// titles are keyed according to `policy`.
pub fn normalize_platform(
    mut entries: Vec<GameEntry<PlatformRecord>>,
    input: &str,
    policy: TitlePolicy,
) -> Result<(GameMap<PlatformRecord>, Diagnostics), MergeError> {
    let mut id_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &entries {
        *id_counts.entry(entry.data.id.as_str()).or_default() += 1;
    }
    let duplicate_ids: Vec<String> = id_counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(id, _)| id.to_string())
        .collect();
    if !duplicate_ids.is_empty() {
        return Err(MergeError::DuplicateIds {
            input: input.to_string(),
            ids: duplicate_ids,
        });
    }

    if let Some(bad) = entries
        .iter()
        .find(|e| !e.data.hours_played.is_finite() || e.data.hours_played < 0.0)
    {
        return Err(MergeError::InvalidHours {
            input: input.to_string(),
            title: bad.game.clone(),
            hours: bad.data.hours_played,
        });
    }

    for entry in &mut entries {
        // Negative zero passes the check above; store it as plain zero.
        if entry.data.hours_played == 0.0 {
            entry.data.hours_played = 0.0;
        }
    }

    let (games, diagnostics) = key_by_title(entries, input, policy)?;
    log::debug!("Normalized {} games from {}", games.len(), input);
    Ok((games, diagnostics))
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;

//! Cross-platform accumulation.
//!
//! Folds normalized per-platform maps into one title-keyed catalog where each
//! game holds one slot per platform it was reported on, plus rolled-up totals.
//! The accumulator is passed by value and returned, so the fold reads as a
//! plain reduce over the platform batches.

use chrono::NaiveDate;
use playlog_catalog::{AccumulatedGame, GameMap, PlatformRecord, PlatformSlot};

use crate::error::MergeError;

/// The later of two optional dates. A missing date never beats a present one.
pub fn most_recent(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Fold one platform batch into the accumulated catalog.
///
/// A title seen for the first time gets a single-slot game. A known title on
/// a new platform gains a slot. A known title on a platform it already has
/// (the same platform exported twice, e.g. per region) adds its hours into
/// that slot; its id and url must match the existing slot.
pub fn accumulate(
    mut catalog: GameMap<AccumulatedGame>,
    batch: &GameMap<PlatformRecord>,
) -> Result<GameMap<AccumulatedGame>, MergeError> {
    log::debug!("Merging {} games from platform", batch.len());

    for (title, record) in batch {
        match catalog.get_mut(title) {
            None => {
                log::debug!("First platform entry for game: {}", title);
                catalog.insert(title.clone(), AccumulatedGame::from_record(record));
            }
            Some(game) => absorb_record(game, title, record)?,
        }
    }

    Ok(catalog)
}

/// Fold every batch, in order, starting from an empty catalog.
pub fn accumulate_all<'a, I>(batches: I) -> Result<GameMap<AccumulatedGame>, MergeError>
where
    I: IntoIterator<Item = &'a GameMap<PlatformRecord>>,
{
    batches
        .into_iter()
        .try_fold(GameMap::new(), |catalog, batch| accumulate(catalog, batch))
}

fn absorb_record(
    game: &mut AccumulatedGame,
    title: &str,
    record: &PlatformRecord,
) -> Result<(), MergeError> {
    match game.slot_index(&record.platform) {
        Some(idx) => {
            log::debug!("Platform {} already listed for {}", record.platform, title);
            let slot = &mut game.slots[idx];
            check_identity(title, slot, record)?;
            slot.hours_played += record.hours_played;
            slot.last_played = most_recent(slot.last_played, record.last_played);
        }
        None => {
            log::debug!("Adding {} slot to {}", record.platform, title);
            game.slots.push(PlatformSlot::from_record(record));
        }
    }
    game.hours_played_total += record.hours_played;
    game.last_played_total = most_recent(game.last_played_total, record.last_played);
    Ok(())
}

fn check_identity(
    title: &str,
    slot: &PlatformSlot,
    record: &PlatformRecord,
) -> Result<(), MergeError> {
    let mismatch = |field: &'static str, existing: &str, incoming: &str| {
        MergeError::SlotIdentityMismatch {
            title: title.to_string(),
            platform: record.platform.clone(),
            field,
            existing: existing.to_string(),
            incoming: incoming.to_string(),
        }
    };
    if slot.id != record.id {
        return Err(mismatch("id", &slot.id, &record.id));
    }
    if slot.url != record.url {
        return Err(mismatch("url", &slot.url, &record.url));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/accumulate_tests.rs"]
mod tests;

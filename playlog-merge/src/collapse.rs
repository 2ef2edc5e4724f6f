//! Display-name collapsing.
//!
//! After the join, records are still keyed by the title each platform
//! reported. Several reported titles may name the same game (through aliases
//! or a shared `displayName`); this module regroups them under one display
//! name, checks that their curated fields agree, and merges their platform
//! slots.

use std::collections::BTreeSet;

use playlog_catalog::{AccumulatedGame, Annotation, GameEntry, GameMap};
use serde_json::{Map, Value};

use crate::accumulate::most_recent;
use crate::aliases::ExpandedAnnotation;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MergeError;
use crate::join::Overlay;

/// Accumulated platform data joined with its (possibly alias-derived) annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedGame {
    pub game: AccumulatedGame,
    pub annotation: ExpandedAnnotation,
}

impl Overlay<ExpandedAnnotation> for AccumulatedGame {
    type Output = JoinedGame;

    fn overlay(&self, rhs: &ExpandedAnnotation) -> JoinedGame {
        JoinedGame {
            game: self.clone(),
            annotation: rhs.clone(),
        }
    }
}

/// A game after collapsing: platform data plus the curated fields that reach
/// the output. Alias bookkeeping and the display name itself are gone.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsedGame {
    pub game: AccumulatedGame,
    pub rating: Option<f64>,
    pub status: Option<String>,
    pub tags: BTreeSet<String>,
    pub extra: Map<String, Value>,
}

impl JoinedGame {
    /// Name this record is grouped under: the curated `displayName`, else
    /// the canonical annotation key, else the reported title.
    pub fn display_name(&self, title: &str) -> String {
        self.annotation
            .annotation
            .display_name
            .clone()
            .or_else(|| self.annotation.alias_of.clone())
            .unwrap_or_else(|| title.to_string())
    }

    fn into_collapsed(self) -> CollapsedGame {
        let Annotation {
            rating,
            status,
            tags,
            extra,
            ..
        } = self.annotation.annotation;
        CollapsedGame {
            game: self.game,
            rating,
            status,
            tags,
            extra,
        }
    }
}

/// Drop annotations that have not been rated yet, keeping definition order.
pub fn curated_only(annotations: &[GameEntry<Annotation>]) -> Vec<GameEntry<Annotation>> {
    let curated: Vec<GameEntry<Annotation>> = annotations
        .iter()
        .filter(|e| e.data.is_curated())
        .cloned()
        .collect();
    log::debug!(
        "{} of {} annotations remaining after filtering unrated games",
        curated.len(),
        annotations.len()
    );
    curated
}

/// Regroup joined records by display name.
///
/// The first record seen for a name becomes the group. Every later record
/// must carry the same `rating` and `status`; its platform slots are merged
/// in (see [`merge_slots`]), totals are combined, and tags are unioned.
pub fn collapse_by_display_name(
    joined: GameMap<JoinedGame>,
) -> Result<(GameMap<CollapsedGame>, Diagnostics), MergeError> {
    let mut diagnostics = Diagnostics::new();
    let mut collapsed: GameMap<CollapsedGame> = GameMap::new();

    for (title, record) in joined {
        let display_name = record.display_name(&title);
        let incoming = record.into_collapsed();

        match collapsed.get_mut(&display_name) {
            None => {
                collapsed.insert(display_name, incoming);
            }
            Some(existing) => {
                diagnostics.push(Diagnostic::CollapsedVariant {
                    display_name: display_name.clone(),
                    title,
                });
                absorb_variant(existing, incoming, &display_name)?;
            }
        }
    }

    log::debug!("Collapsed to {} unique games", collapsed.len());
    Ok((collapsed, diagnostics))
}

fn absorb_variant(
    existing: &mut CollapsedGame,
    incoming: CollapsedGame,
    display_name: &str,
) -> Result<(), MergeError> {
    if existing.rating != incoming.rating {
        return Err(MergeError::RatingMismatch {
            display_name: display_name.to_string(),
            existing: existing.rating,
            incoming: incoming.rating,
        });
    }
    if existing.status != incoming.status {
        return Err(MergeError::StatusMismatch {
            display_name: display_name.to_string(),
            existing: existing.status.clone(),
            incoming: incoming.status,
        });
    }

    merge_slots(&mut existing.game, &incoming.game);
    existing.game.last_played_total =
        most_recent(existing.game.last_played_total, incoming.game.last_played_total);
    existing.game.hours_played_total += incoming.game.hours_played_total;
    existing.tags.extend(incoming.tags);
    Ok(())
}

/// Merge `incoming`'s platform slots into `existing`.
///
/// A platform new to the group gets its own slot. On a shared platform the
/// hours add up, the later date is kept, and the id and url follow whichever
/// side played more recently (the incoming side on a tie).
pub fn merge_slots(existing: &mut AccumulatedGame, incoming: &AccumulatedGame) {
    for slot in &incoming.slots {
        match existing.slot_index(&slot.platform) {
            None => existing.slots.push(slot.clone()),
            Some(idx) => {
                let target = &mut existing.slots[idx];
                if slot.last_played >= target.last_played {
                    target.id = slot.id.clone();
                    target.url = slot.url.clone();
                }
                target.hours_played += slot.hours_played;
                target.last_played = most_recent(target.last_played, slot.last_played);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/collapse_tests.rs"]
mod tests;

//! Manual playtime for platforms that report ownership but not play history.

use playlog_catalog::{GameMap, PlatformRecord, PlaytimeAnnotation};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::join::{Overlay, inner_join};

impl Overlay<PlaytimeAnnotation> for PlatformRecord {
    type Output = PlatformRecord;

    fn overlay(&self, rhs: &PlaytimeAnnotation) -> PlatformRecord {
        PlatformRecord {
            last_played: rhs.last_played,
            hours_played: rhs.hours_played,
            ..self.clone()
        }
    }
}

/// Apply manual playtime to a platform's records.
///
/// Only games that have a playtime annotation are kept. Annotations naming a
/// game the platform does not list are reported as
/// [`Diagnostic::UnmatchedPlaytime`].
pub fn apply_playtime(
    records: &GameMap<PlatformRecord>,
    playtime: &GameMap<PlaytimeAnnotation>,
) -> (GameMap<PlatformRecord>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    for title in playtime.keys().filter(|t| !records.contains_key(*t)) {
        diagnostics.push(Diagnostic::UnmatchedPlaytime {
            title: title.clone(),
        });
    }

    let annotated = inner_join(records, playtime);
    log::debug!(
        "Merged {} games (only games with playtime annotations)",
        annotated.len()
    );
    (annotated, diagnostics)
}

#[cfg(test)]
#[path = "tests/playtime_tests.rs"]
mod tests;

//! Coverage between platform data and curated annotations.
//!
//! Reports games that are on one side but not the other. Gaps never block a
//! merge; uncovered platform games get a blank annotation template so they
//! can be curated by hand.

use std::collections::BTreeSet;

use playlog_catalog::{Annotation, GameEntry, GameMap};

use crate::aliases::expand_aliases;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Result of comparing platform titles against annotation keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageReport {
    /// Platform titles matching no annotation or alias.
    pub missing_annotations: BTreeSet<String>,
    /// Canonical annotation names with no platform data under the name or
    /// any of its aliases.
    pub missing_platform_data: BTreeSet<String>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing_annotations.is_empty() && self.missing_platform_data.is_empty()
    }

    /// Blank annotation for every game missing one.
    pub fn stub_annotations(&self) -> GameMap<Annotation> {
        self.missing_annotations
            .iter()
            .map(|title| (title.clone(), Annotation::stub()))
            .collect()
    }
}

/// Compare platform titles with the full (unfiltered) annotation set, given
/// in definition order.
///
/// Diagnostics from alias expansion are included, followed by one event per
/// gap.
pub fn report_coverage<T>(
    platform_data: &GameMap<T>,
    annotations: &[GameEntry<Annotation>],
) -> (CoverageReport, Diagnostics) {
    let (expanded, mut diagnostics) = expand_aliases(annotations);

    let missing_annotations: BTreeSet<String> = platform_data
        .keys()
        .filter(|title| !expanded.contains_key(*title))
        .cloned()
        .collect();

    let missing_platform_data: BTreeSet<String> = annotations
        .iter()
        .filter(|e| {
            !platform_data.contains_key(&e.game)
                && !e.data.aliases.iter().any(|a| platform_data.contains_key(a))
        })
        .map(|e| e.game.clone())
        .collect();

    for title in &missing_annotations {
        diagnostics.push(Diagnostic::MissingAnnotation {
            title: title.clone(),
        });
    }
    for title in &missing_platform_data {
        diagnostics.push(Diagnostic::MissingPlatformData {
            title: title.clone(),
        });
    }

    (
        CoverageReport {
            missing_annotations,
            missing_platform_data,
        },
        diagnostics,
    )
}

#[cfg(test)]
#[path = "tests/coverage_tests.rs"]
mod tests;

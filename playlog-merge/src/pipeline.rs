//! Stage sequencing over already-loaded snapshots.
//!
//! These functions do no I/O: the caller loads the snapshots, runs a stage,
//! and writes the result only if the stage succeeded.

use playlog_catalog::{AccumulatedGame, Annotation, GameEntry, GameMap, MergedGame, PlatformRecord};

use crate::accumulate::accumulate;
use crate::aliases::expand_aliases;
use crate::collapse::{collapse_by_display_name, curated_only};
use crate::coverage::{CoverageReport, report_coverage};
use crate::diagnostics::Diagnostics;
use crate::error::MergeError;
use crate::join::inner_join;
use crate::normalize::{TitlePolicy, normalize_platform};
use crate::present::present_all;

/// One platform snapshot as loaded from disk, with the name of its source.
pub struct PlatformBatch {
    pub input: String,
    pub entries: Vec<GameEntry<PlatformRecord>>,
}

/// Normalize each platform batch and fold them, in order, into one catalog.
///
/// Duplicate titles inside one batch are tolerated (the later row wins) and
/// reported; duplicate external ids are fatal.
pub fn merge_platforms(
    batches: Vec<PlatformBatch>,
) -> Result<(GameMap<AccumulatedGame>, Diagnostics), MergeError> {
    let mut diagnostics = Diagnostics::new();
    let mut catalog = GameMap::new();

    for batch in batches {
        let (records, batch_diagnostics) =
            normalize_platform(batch.entries, &batch.input, TitlePolicy::LastWins)?;
        diagnostics.extend(batch_diagnostics);
        catalog = accumulate(catalog, &records)?;
    }

    Ok((catalog, diagnostics))
}

/// Output of [`annotate_games`].
#[derive(Debug)]
pub struct AnnotateOutcome {
    pub games: GameMap<MergedGame>,
    pub coverage: CoverageReport,
    pub diagnostics: Diagnostics,
}

/// Join the accumulated catalog with curated annotations and produce the
/// final, display-name keyed catalog.
///
/// `annotations` are in definition order with unique titles (see
/// [`ensure_unique_titles`](crate::normalize::ensure_unique_titles)); that
/// order settles alias collisions. Coverage, and with it every alias
/// collision warning, comes from the full annotation set. The merge itself
/// expands only the rated annotations, whose collisions are a subset of
/// those already reported.
pub fn annotate_games<S: AsRef<str>>(
    platform_data: &GameMap<AccumulatedGame>,
    annotations: &[GameEntry<Annotation>],
    url_preference: &[S],
) -> Result<AnnotateOutcome, MergeError> {
    let (coverage, mut diagnostics) = report_coverage(platform_data, annotations);

    let curated = curated_only(annotations);
    let (expanded, _) = expand_aliases(&curated);
    log::debug!("{} annotation entries after alias expansion", expanded.len());

    let joined = inner_join(platform_data, &expanded);
    let (collapsed, collapse_diagnostics) = collapse_by_display_name(joined)?;
    diagnostics.extend(collapse_diagnostics);

    Ok(AnnotateOutcome {
        games: present_all(collapsed, url_preference),
        coverage,
        diagnostics,
    })
}

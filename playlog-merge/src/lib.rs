//! Cross-source identity resolution and merge engine.
//!
//! This crate owns all merge logic: normalizing per-platform snapshots,
//! accumulating them into one catalog, expanding annotation aliases, joining
//! platform data with curated annotations, collapsing reported titles into
//! display names, and preparing the final catalog for output.

pub mod accumulate;
pub mod aliases;
pub mod collapse;
pub mod coverage;
pub mod diagnostics;
pub mod error;
pub mod join;
pub mod normalize;
pub mod pipeline;
pub mod playtime;
pub mod present;

pub use accumulate::{accumulate, accumulate_all, most_recent};
pub use aliases::{ExpandedAnnotation, expand_aliases};
pub use collapse::{CollapsedGame, JoinedGame, collapse_by_display_name, curated_only, merge_slots};
pub use coverage::{CoverageReport, report_coverage};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::MergeError;
pub use join::{Overlay, inner_join};
pub use normalize::{TitlePolicy, ensure_unique_titles, key_by_title, normalize_platform};
pub use pipeline::{AnnotateOutcome, PlatformBatch, annotate_games, merge_platforms};
pub use playtime::apply_playtime;
pub use present::{DEFAULT_URL_PREFERENCE, order_slots, present, present_all, select_display_url};

#[cfg(test)]
#[path = "tests/support.rs"]
mod tests_support;

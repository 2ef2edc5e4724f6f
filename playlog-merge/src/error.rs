use thiserror::Error;

/// Data integrity violations. Any of these aborts the run: repairing them
/// silently could attribute playtime or ratings to the wrong game.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Two records in one platform batch share an external id.
    #[error("Duplicate ids in {input}: {}", .ids.join(", "))]
    DuplicateIds { input: String, ids: Vec<String> },

    /// Two records in a source that requires unique titles share one.
    #[error("Duplicate game names in {input}: {}", .titles.join(", "))]
    DuplicateTitles { input: String, titles: Vec<String> },

    /// Hours played must be a finite, non-negative number.
    #[error("Invalid hoursPlayed for '{title}' in {input}: {hours}")]
    InvalidHours {
        input: String,
        title: String,
        hours: f64,
    },

    /// Records collapsing into one display name carry different ratings.
    #[error("Incompatible ratings for game '{display_name}': {incoming:?} vs {existing:?}")]
    RatingMismatch {
        display_name: String,
        existing: Option<f64>,
        incoming: Option<f64>,
    },

    /// Records collapsing into one display name carry different statuses.
    #[error("Incompatible statuses for game '{display_name}': {incoming:?} vs {existing:?}")]
    StatusMismatch {
        display_name: String,
        existing: Option<String>,
        incoming: Option<String>,
    },

    /// The same game reappeared on the same platform with a different id or url.
    #[error(
        "Conflicting {field} for '{title}' on {platform}: existing '{existing}', incoming '{incoming}'"
    )]
    SlotIdentityMismatch {
        title: String,
        platform: String,
        field: &'static str,
        existing: String,
        incoming: String,
    },
}

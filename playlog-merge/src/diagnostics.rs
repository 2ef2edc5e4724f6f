//! Structured, non-fatal events produced by the merge stages.
//!
//! Stages return a [`Diagnostics`] alongside their result instead of logging
//! directly; the caller decides how to surface them.

use std::fmt;

/// How prominently a diagnostic should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

/// A single event recorded during a merge stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An alias is already a key in the expanded annotations; the alias was skipped.
    AliasCollision { alias: String, canonical: String },
    /// A platform file listed the same title twice; the later row was kept.
    DuplicateTitle { input: String, title: String },
    /// A reported title was folded into an existing display-name group.
    CollapsedVariant { display_name: String, title: String },
    /// A game has platform data but no annotation (a stub was generated).
    MissingAnnotation { title: String },
    /// An annotation (and every alias of it) has no platform data.
    MissingPlatformData { title: String },
    /// A playtime annotation names a game the platform data does not contain.
    UnmatchedPlaytime { title: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::AliasCollision { .. }
            | Self::DuplicateTitle { .. }
            | Self::UnmatchedPlaytime { .. } => Severity::Warning,
            Self::CollapsedVariant { .. }
            | Self::MissingAnnotation { .. }
            | Self::MissingPlatformData { .. } => Severity::Info,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AliasCollision { alias, canonical } => {
                write!(f, "Alias '{}' for '{}' conflicts with existing game", alias, canonical)
            }
            Self::DuplicateTitle { input, title } => {
                write!(f, "Duplicate entry for '{}' in {}; keeping the last one", title, input)
            }
            Self::CollapsedVariant {
                display_name,
                title,
            } => write!(f, "Merging '{}' into '{}'", title, display_name),
            Self::MissingAnnotation { title } => {
                write!(f, "'{}' has platform data but no annotation", title)
            }
            Self::MissingPlatformData { title } => {
                write!(f, "'{}' is annotated but has no platform data", title)
            }
            Self::UnmatchedPlaytime { title } => {
                write!(f, "Game '{}' has playtime annotations but no platform entry", title)
            }
        }
    }
}

/// Ordered collection of diagnostics from one or more stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Diagnostic) {
        self.events.push(event);
    }

    /// Append every event from `other`, keeping order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.events.extend(other.events);
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events
            .iter()
            .filter(|e| e.severity() == Severity::Warning)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

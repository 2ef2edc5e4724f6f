//! Alias expansion for curated annotations.
//!
//! An annotation may list alternate titles that platforms report for the same
//! game. Expansion adds one synthetic entry per alias so that a plain key
//! join resolves those titles too.

use playlog_catalog::{Annotation, GameEntry, GameMap};

use crate::diagnostics::{Diagnostic, Diagnostics};

/// An annotation entry in the expanded map.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedAnnotation {
    pub annotation: Annotation,
    /// Canonical annotation key, set only on alias-derived entries.
    pub alias_of: Option<String>,
}

impl ExpandedAnnotation {
    pub fn canonical(annotation: Annotation) -> Self {
        Self {
            annotation,
            alias_of: None,
        }
    }

    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// Expand every alias into its own entry.
///
/// `annotations` are in definition order with unique titles. Canonical
/// entries are always kept as they are. Aliases are then added in definition
/// order; one that is already a key (a canonical name, or an alias added
/// earlier) is skipped with an [`Diagnostic::AliasCollision`], so the
/// earliest-defined annotation wins.
pub fn expand_aliases(
    annotations: &[GameEntry<Annotation>],
) -> (GameMap<ExpandedAnnotation>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut expanded: GameMap<ExpandedAnnotation> = annotations
        .iter()
        .map(|e| (e.game.clone(), ExpandedAnnotation::canonical(e.data.clone())))
        .collect();

    let mut alias_count = 0usize;
    for GameEntry { game: name, data: ann } in annotations {
        for alias in &ann.aliases {
            if expanded.contains_key(alias) {
                diagnostics.push(Diagnostic::AliasCollision {
                    alias: alias.clone(),
                    canonical: name.clone(),
                });
                continue;
            }
            expanded.insert(
                alias.clone(),
                ExpandedAnnotation {
                    annotation: ann.clone(),
                    alias_of: Some(name.clone()),
                },
            );
            alias_count += 1;
        }
    }

    if alias_count > 0 {
        log::debug!("Expanded {} aliases from annotations", alias_count);
    }
    (expanded, diagnostics)
}

#[cfg(test)]
#[path = "tests/aliases_tests.rs"]
mod tests;

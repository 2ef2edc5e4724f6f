use std::path::PathBuf;

use playlog_catalog::CatalogError;
use playlog_merge::MergeError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be read, parsed or written
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Input data violates an integrity guarantee
    #[error("Data integrity error: {0}")]
    Merge(#[from] MergeError),

    /// Settings file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Required input files are not present
    #[error("Missing input files: {}", display_paths(.0))]
    MissingInputs(Vec<PathBuf>),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

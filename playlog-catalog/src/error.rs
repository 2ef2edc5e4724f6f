use thiserror::Error;

/// Errors raised while reading or writing game snapshots.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("JSON serialization error for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    /// A record parsed as JSON but violates the shape of the data model.
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

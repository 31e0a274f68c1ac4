use std::path::PathBuf;
use thiserror::Error;

/// Failures of the key-value store behind user preferences.
///
/// These never reach the user: the preferences layer logs them and falls
/// back to safe defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to initialize storage: {0}")]
    InitFailed(String),

    #[error("Failed to read from storage at {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to storage at {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupted storage data at {0}")]
    CorruptedData(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog root must be an object of category -> entries")]
    NotAnObject,

    #[error("category '{category}' must be an array of entries")]
    InvalidCategory {
        category: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] marquee_model::ModelError),
}

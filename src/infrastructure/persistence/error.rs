//! Storage failures of the file-backed link store.

use serde_json::json;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data file {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Failed to serialize links: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::internal("Storage failure", json!({ "cause": e.to_string() }))
    }
}

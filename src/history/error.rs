use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the history store. None of them are retried.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file could not be created, read, or written.
    #[error("history storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The history file exists but is not a JSON array of records.
    #[error("history file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HistoryError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StorageUnavailable { path: path.into(), source }
    }
}

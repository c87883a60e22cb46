//! Error taxonomy for save/load
//!
//! A missing slot is not an error (`load` returns the caller's default), and
//! an incompatible envelope is recovered inside the manager. Everything else
//! surfaces here so callers can decide whether a failed save/load is fatal.

use std::path::PathBuf;

/// Result alias used throughout the persistence layer
pub type Result<T> = std::result::Result<T, PersistError>;

/// Failures that reach the caller of `save`/`load`
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The storage medium rejected a read or write
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data exists but is not valid text or does not decode as an envelope
    #[error("corrupt save data for key '{key}': {source}")]
    CorruptData {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Envelope decoded but its payload is not the requested type
    #[error("payload for key '{key}' does not match the requested type: {source}")]
    TypeMismatch {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The value handed to `save` could not be encoded
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key cannot be used as a storage slot name
    #[error("invalid save key: '{0}'")]
    InvalidKey(String),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }
}

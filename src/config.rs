//! Storage configuration
//!
//! Owned by the host and handed to the manager. Read on every save/load, so a
//! change made through the manager's setters applies to the next call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory for local save slots
pub const DEFAULT_LOCAL_PATH: &str = "saves";

/// JSON output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationOptions {
    /// Pretty-print stored envelopes (human-readable, larger files)
    pub pretty: bool,
}

/// Where and how save slots are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    // === Local ===
    /// Directory holding one file per key
    pub local_path: PathBuf,

    // === Remote ===
    /// Identifier of the remote store (account, bucket, ...)
    pub remote_id: String,
    /// Route save/load to the remote backend instead of local disk
    pub use_remote: bool,

    // === Encoding ===
    pub serialization: SerializationOptions,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),

            remote_id: String::new(),
            use_remote: false,

            serialization: SerializationOptions::default(),
        }
    }
}

impl StorageConfig {
    /// Local-only configuration rooted at `path`
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            local_path: path.into(),
            ..Self::default()
        }
    }
}

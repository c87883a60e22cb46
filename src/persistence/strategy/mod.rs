//! Storage backends
//!
//! A strategy moves opaque envelope text to and from one medium. It knows
//! nothing about envelopes, versions or payload types.

pub mod local;
pub mod remote;

pub use local::LocalStrategy;
pub use remote::RemoteStrategy;

use super::error::Result;

/// A backend that can store and fetch text blobs by key
pub trait StorageStrategy {
    /// Persist `blob` so that a later `load(key)` returns it.
    /// Overwrites whatever was stored under `key`.
    fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Fetch the blob stored under `key`, or `None` if nothing was saved
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Remove the blob stored under `key`. Returns `true` if one existed.
    fn delete(&self, key: &str) -> Result<bool>;

    /// Short backend name for log lines
    fn name(&self) -> &'static str;
}

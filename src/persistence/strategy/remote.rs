//! Remote backend placeholder
//!
//! Stands in for a cloud save service. It only logs what it would do:
//! `save` succeeds without storing anything and `load` always reports absent.
//! A real client replaces the bodies below and keeps the same contract,
//! including any retry/backoff policy it needs.

use super::StorageStrategy;
use crate::persistence::error::Result;

/// Remote store addressed by a single configured identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteStrategy {
    identifier: String,
}

impl RemoteStrategy {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl StorageStrategy for RemoteStrategy {
    fn save(&self, key: &str, blob: &str) -> Result<()> {
        log::info!(
            "Remote save not implemented: would store '{}' ({} bytes) under '{}'",
            key,
            blob.len(),
            self.identifier
        );
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        log::info!(
            "Remote load not implemented: would fetch '{}' from '{}'",
            key,
            self.identifier
        );
        Ok(None)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        log::info!(
            "Remote delete not implemented: would remove '{}' from '{}'",
            key,
            self.identifier
        );
        Ok(false)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

//! Save/load entry point
//!
//! The manager owns the configuration and one instance of each backend. The
//! active backend is picked from `use_remote` on every call, so setters take
//! effect immediately without rebuilding anything.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::compat::{CompatibilityCheck, FormatVersionCheck, LogSink, WarningSink};
use super::envelope::{Envelope, FORMAT_VERSION};
use super::error::{PersistError, Result};
use super::strategy::{LocalStrategy, RemoteStrategy, StorageStrategy};
use crate::config::{SerializationOptions, StorageConfig};

/// Typed key-value persistence over a local or remote backend
pub struct PersistenceManager {
    config: StorageConfig,
    local: LocalStrategy,
    remote: RemoteStrategy,
    compatibility: Box<dyn CompatibilityCheck>,
    warnings: Box<dyn WarningSink>,
}

impl Default for PersistenceManager {
    fn default() -> Self {
        Self::new(StorageConfig::default())
    }
}

impl std::fmt::Debug for PersistenceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PersistenceManager {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            local: LocalStrategy::new(&config.local_path),
            remote: RemoteStrategy::new(&config.remote_id),
            config,
            compatibility: Box::new(FormatVersionCheck),
            warnings: Box::new(LogSink),
        }
    }

    /// Replace the load-time compatibility predicate
    pub fn with_compatibility_check(mut self, check: impl CompatibilityCheck + 'static) -> Self {
        self.compatibility = Box::new(check);
        self
    }

    /// Replace the receiver of incompatibility warnings
    pub fn with_warning_sink(mut self, sink: impl WarningSink + 'static) -> Self {
        self.warnings = Box::new(sink);
        self
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn configure_local_path(&mut self, path: impl Into<PathBuf>) {
        self.config.local_path = path.into();
        self.local = LocalStrategy::new(&self.config.local_path);
    }

    pub fn configure_remote(&mut self, identifier: impl Into<String>, enabled: bool) {
        self.config.remote_id = identifier.into();
        self.config.use_remote = enabled;
        self.remote = RemoteStrategy::new(&self.config.remote_id);
    }

    pub fn configure_serialization(&mut self, options: SerializationOptions) {
        self.config.serialization = options;
    }

    /// Backend selected by the current configuration
    fn strategy(&self) -> &dyn StorageStrategy {
        if self.config.use_remote {
            &self.remote
        } else {
            &self.local
        }
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(value).map_err(|source| PersistError::Serialize {
            key: key.to_string(),
            source,
        })?;
        let envelope = Envelope::new(key, payload);
        let text = envelope
            .to_text(&self.config.serialization)
            .map_err(|source| PersistError::Serialize {
                key: key.to_string(),
                source,
            })?;

        let strategy = self.strategy();
        log::debug!("Saving '{}' via {} backend", key, strategy.name());
        strategy.save(key, &text)
    }

    /// Load the value stored under `key`, or `default` if there is none
    /// or the stored data fails the compatibility check.
    pub fn load<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let strategy = self.strategy();
        log::debug!("Loading '{}' via {} backend", key, strategy.name());

        let text = match strategy.load(key)? {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                log::debug!("No data for '{}', using default", key);
                return Ok(default);
            }
        };

        let envelope = Envelope::from_text(&text).map_err(|source| PersistError::CorruptData {
            key: key.to_string(),
            source: Box::new(source),
        })?;

        if !self.compatibility.is_compatible(&envelope, FORMAT_VERSION) {
            self.warnings.warn(&format!(
                "Save data for '{}' (format v{}) is not compatible with format v{}, using default",
                key,
                envelope.version(),
                FORMAT_VERSION
            ));
            return Ok(default);
        }

        serde_json::from_value(envelope.into_payload()).map_err(|source| {
            PersistError::TypeMismatch {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Remove the value stored under `key`. Returns `true` if one existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let strategy = self.strategy();
        let removed = strategy.delete(key)?;
        if removed {
            log::info!("Deleted '{}' from {} backend", key, strategy.name());
        }
        Ok(removed)
    }
}

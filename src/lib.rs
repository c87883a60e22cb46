//! Savekit - typed key-value save/load
//!
//! Core modules:
//! - `persistence`: Envelope format, storage backends and the save/load manager
//! - `config`: Storage configuration owned by the host

pub mod config;
pub mod persistence;

pub use config::{SerializationOptions, StorageConfig};
pub use persistence::{
    Envelope, LocalStrategy, PersistError, PersistenceManager, RemoteStrategy, StorageStrategy,
};

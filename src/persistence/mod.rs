//! Save/load persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Pluggable storage backends (local filesystem, remote placeholder)
//! - Load-time compatibility check with default-value fallback
//! - Typed errors for I/O failures, corruption and type mismatches

pub mod compat;
pub mod envelope;
pub mod error;
pub mod manager;
pub mod strategy;

pub use compat::{AlwaysCompatible, CompatibilityCheck, FormatVersionCheck, LogSink, WarningSink};
pub use envelope::{Envelope, FORMAT_VERSION};
pub use error::{PersistError, Result};
pub use manager::PersistenceManager;
pub use strategy::{LocalStrategy, RemoteStrategy, StorageStrategy};

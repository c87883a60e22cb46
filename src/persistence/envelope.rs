//! Versioned JSON envelope
//!
//! Every save slot is stored as a single envelope:
//! `{"version": 1, "key": "...", "payload": <value>}`.
//! The payload stays untyped at rest and is re-typed by the loader.

use serde::{Deserialize, Serialize};

use crate::config::SerializationOptions;

/// Envelope format version written by this build
pub const FORMAT_VERSION: u32 = 1;

/// Key + payload unit, serialized and persisted as one piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Format version of the writer (0 = written before versioning)
    #[serde(default)]
    version: u32,
    /// Save slot this payload belongs to
    key: String,
    /// Caller's value, untyped at rest
    payload: serde_json::Value,
}

impl Envelope {
    /// Wrap a payload, stamped with the current format version
    pub fn new(key: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::with_version(FORMAT_VERSION, key, payload)
    }

    /// Wrap a payload under an explicit format version
    pub fn with_version(version: u32, key: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            version,
            key: key.into(),
            payload,
        }
    }

    /// Format version the envelope was written with
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Save slot key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored value, not yet converted to the caller's type
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Consume the envelope, keeping only the payload
    pub fn into_payload(self) -> serde_json::Value {
        self.payload
    }

    /// Encode as JSON text
    pub fn to_text(&self, options: &SerializationOptions) -> serde_json::Result<String> {
        if options.pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Decode from JSON text
    pub fn from_text(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_stamps_current_version() {
        let env = Envelope::new("slot", json!(42));
        assert_eq!(env.version(), FORMAT_VERSION);
        assert_eq!(env.key(), "slot");
        assert_eq!(env.payload(), &json!(42));
    }

    #[test]
    fn test_text_layout() {
        let env = Envelope::new("profile", json!({"name": "ada", "level": 3}));
        let text = env.to_text(&SerializationOptions::default()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(raw["version"], json!(FORMAT_VERSION));
        assert_eq!(raw["key"], json!("profile"));
        assert_eq!(raw["payload"]["level"], json!(3));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_pretty_output_decodes_the_same() {
        let env = Envelope::new("profile", json!([1, 2, 3]));
        let pretty = env.to_text(&SerializationOptions { pretty: true }).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(Envelope::from_text(&pretty).unwrap(), env);
    }

    #[test]
    fn test_missing_version_decodes_as_legacy() {
        let env = Envelope::from_text(r#"{"key":"old","payload":"x"}"#).unwrap();
        assert_eq!(env.version(), 0);
        assert_eq!(env.into_payload(), json!("x"));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        assert!(Envelope::from_text(r#"{"version":1,"payload":1}"#).is_err());
        assert!(Envelope::from_text("not json").is_err());
    }
}

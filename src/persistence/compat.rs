//! Load-time compatibility checks
//!
//! Run on every decoded envelope before its payload is handed out. A rejected
//! envelope is not an error: the manager warns and returns the caller's default.

use super::envelope::Envelope;

/// Decides whether a stored envelope can be read by this build
pub trait CompatibilityCheck {
    fn is_compatible(&self, envelope: &Envelope, current_version: u32) -> bool;
}

impl<F> CompatibilityCheck for F
where
    F: Fn(&Envelope, u32) -> bool,
{
    fn is_compatible(&self, envelope: &Envelope, current_version: u32) -> bool {
        self(envelope, current_version)
    }
}

/// Accepts data written by this format version or any older one
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatVersionCheck;

impl CompatibilityCheck for FormatVersionCheck {
    fn is_compatible(&self, envelope: &Envelope, current_version: u32) -> bool {
        envelope.version() <= current_version
    }
}

/// Accepts everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCompatible;

impl CompatibilityCheck for AlwaysCompatible {
    fn is_compatible(&self, _envelope: &Envelope, _current_version: u32) -> bool {
        true
    }
}

/// Receives the warning emitted when a load is rejected
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_version_check() {
        let check = FormatVersionCheck;
        assert!(check.is_compatible(&Envelope::with_version(0, "k", json!(1)), 1));
        assert!(check.is_compatible(&Envelope::with_version(1, "k", json!(1)), 1));
        assert!(!check.is_compatible(&Envelope::with_version(2, "k", json!(1)), 1));
    }

    #[test]
    fn test_closure_check() {
        let only_profile = |env: &Envelope, _: u32| env.key() == "profile";
        assert!(only_profile.is_compatible(&Envelope::new("profile", json!(null)), 1));
        assert!(!only_profile.is_compatible(&Envelope::new("other", json!(null)), 1));
    }

    #[test]
    fn test_always_compatible() {
        let env = Envelope::with_version(u32::MAX, "k", json!(1));
        assert!(AlwaysCompatible.is_compatible(&env, 1));
    }
}

//! Filesystem backend
//!
//! One file per key, directly under the base directory: `base/key`.
//! Writes go to a uniquely named temporary file in the same directory and
//! are renamed into place, so no other slot is ever touched.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::StorageStrategy;
use crate::persistence::error::{PersistError, Result};

/// Stores each key as a file under a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStrategy {
    base: PathBuf,
}

impl LocalStrategy {
    /// Backend rooted at `base`; the directory is created on first save
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File that holds `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base.join(key))
    }
}

/// Keys must name a single file directly inside the base directory
fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(PersistError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl StorageStrategy for LocalStrategy {
    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.base).map_err(|e| PersistError::io(&self.base, e))?;

        let mut tmp =
            NamedTempFile::new_in(&self.base).map_err(|e| PersistError::io(&self.base, e))?;
        tmp.write_all(blob.as_bytes())
            .map_err(|e| PersistError::io(tmp.path(), e))?;
        // A failed persist drops (and removes) the temporary file
        tmp.persist(&path)
            .map_err(|e| PersistError::io(&path, e.error))?;

        log::debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistError::io(&path, e)),
        };
        // Readable but not text: the slot is damaged, the disk is fine
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| PersistError::CorruptData {
                key: key.to_string(),
                source: Box::new(e),
            })
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PersistError::io(&path, e)),
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_same_key() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        local.save("slot1", "hello").unwrap();
        assert_eq!(local.load("slot1").unwrap().as_deref(), Some("hello"));
        assert!(dir.path().join("slot1").is_file());
    }

    #[test]
    fn test_keys_do_not_share_files() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        local.save("a", "first").unwrap();
        local.save("b", "second").unwrap();
        assert_eq!(local.load("a").unwrap().as_deref(), Some("first"));
        assert_eq!(local.load("b").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());
        assert_eq!(local.load("never-saved").unwrap(), None);

        // Base directory that does not exist yet is also just "absent"
        let local = LocalStrategy::new(dir.path().join("missing"));
        assert_eq!(local.load("never-saved").unwrap(), None);
    }

    #[test]
    fn test_save_creates_base_dir_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("saves");
        let local = LocalStrategy::new(&base);

        local.save("slot", "data").unwrap();
        local.save("slot", "data2").unwrap();

        let names: Vec<_> = fs::read_dir(&base)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["slot".to_string()]);
        assert_eq!(local.load("slot").unwrap().as_deref(), Some("data2"));
    }

    #[test]
    fn test_dotted_keys_survive_neighbour_saves() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        local.save(".a.tmp", "precious").unwrap();
        local.save(".tmp", "also precious").unwrap();
        local.save("a", "other").unwrap();

        assert_eq!(local.load(".a.tmp").unwrap().as_deref(), Some("precious"));
        assert_eq!(local.load(".tmp").unwrap().as_deref(), Some("also precious"));
        assert_eq!(local.load("a").unwrap().as_deref(), Some("other"));
    }

    #[test]
    fn test_non_utf8_slot_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        fs::write(dir.path().join("slot"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            local.load("slot"),
            Err(PersistError::CorruptData { ref key, .. }) if key == "slot"
        ));
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        local.save("slot", "x").unwrap();
        assert!(local.delete("slot").unwrap());
        assert!(!local.delete("slot").unwrap());
        assert_eq!(local.load("slot").unwrap(), None);
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let local = LocalStrategy::new(dir.path());

        for key in ["", ".", "..", "../escape", "a/b", "a\\b", "nul\0"] {
            assert!(
                matches!(local.save(key, "x"), Err(PersistError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
            assert!(matches!(local.load(key), Err(PersistError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_unwritable_base_is_io_error() {
        let dir = TempDir::new().unwrap();
        // Base path is a regular file, so the directory cannot be created
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "occupied").unwrap();
        let local = LocalStrategy::new(&file);

        assert!(matches!(local.save("slot", "x"), Err(PersistError::Io { .. })));
    }
}

//! Storage backends for the record store
//!
//! A backend owns exactly one named slot in some key-value medium and moves
//! the whole serialized collection in and out of it as an opaque string.
//! The store never does partial writes: every mutation replaces the slot.
//!
//! Implementations:
//! - [`MemoryBackend`]: in-process, for tests
//! - [`FileBackend`]: one JSON file on disk (native targets)
//! - the browser frontend adds a `localStorage` backend over the same trait

use crate::store::error::StoreResult;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Name of the slot holding the serialized Brief collection
pub const STORAGE_KEY: &str = "competitor_briefs";

/// Whole-payload access to a single storage slot
pub trait StorageBackend {
    /// Read the slot. `None` means the slot has never been written.
    fn load(&self) -> StoreResult<Option<String>>;

    /// Replace the slot with a new payload.
    fn store(&mut self, payload: &str) -> StoreResult<()>;
}

/// In-memory backend, used by tests and as a fallback
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    /// Current slot contents
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn store(&mut self, payload: &str) -> StoreResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed slot: the collection lives in one JSON file
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn load(&self) -> StoreResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn store(&mut self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.load().unwrap(), None);

        backend.store("[]").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.payload(), Some("[]"));
    }

    #[test]
    fn test_file_backend_missing_file_is_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("competitor_briefs.json"));
        assert_eq!(backend.load().unwrap(), None);
    }

    #[test]
    fn test_file_backend_round_trip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("competitor_briefs.json");
        let mut backend = FileBackend::new(&path);

        backend.store(r#"[{"id":1}]"#).unwrap();
        assert!(path.exists());
        assert_eq!(backend.load().unwrap().as_deref(), Some(r#"[{"id":1}]"#));
    }
}

//! Browser storage backend
//!
//! Implements the core `StorageBackend` trait over `window.localStorage`,
//! holding the serialized Brief collection under the `competitor_briefs` key.
//! localStorage is synchronous, so the store's single-writer contract carries
//! over unchanged; two tabs on the same origin race last-writer-wins.

use competeiq::store::{StorageBackend, StoreError, StoreResult, STORAGE_KEY};

/// `localStorage`-backed slot for the Brief collection
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
    key: &'static str,
}

impl LocalStorageBackend {
    /// Bind to the window's localStorage.
    ///
    /// Fails when run outside a browser context or when storage is disabled.
    pub fn new() -> StoreResult<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| StoreError::Backend("no window object".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| StoreError::Backend("localStorage disabled".to_string()))?;

        Ok(Self {
            storage,
            key: STORAGE_KEY,
        })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn load(&self) -> StoreResult<Option<String>> {
        self.storage
            .get_item(self.key)
            .map_err(|e| StoreError::Backend(format!("localStorage read failed: {e:?}")))
    }

    fn store(&mut self, payload: &str) -> StoreResult<()> {
        self.storage
            .set_item(self.key, payload)
            .map_err(|e| StoreError::Backend(format!("localStorage write failed: {e:?}")))
    }
}

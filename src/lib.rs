//! # CompeteIQ
//!
//! Competitor-intelligence briefs backed by a pluggable local record store.
//!
//! ## Features
//!
//! - **Record store**: CRUD over a single collection of loosely-typed Brief
//!   records, mirrored to one storage slot after every mutation
//! - **Pluggable backends**: in-memory for tests, a JSON file on native
//!   targets, browser `localStorage` in the WASM frontend
//! - **Typed guarantees**: `id` and both timestamps are store-authored and
//!   statically typed; everything else is an open attribute map
//! - **Page table**: the fixed route table shared with the frontend router
//!
//! ## Modules
//!
//! - [`store`]: the Brief record store and its storage backends
//! - [`pages`]: page table and URL builder
//! - [`config`]: TOML + environment configuration (native targets)
//!
//! ## Quick Start
//!
//! ```rust
//! use competeiq::store::{BriefStore, MemoryBackend};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = BriefStore::open(Box::new(MemoryBackend::new()))?;
//!
//!     let mut fields = serde_json::Map::new();
//!     fields.insert("competitor_name".into(), "Acme Corp".into());
//!     fields.insert("industry".into(), "SaaS".into());
//!     let brief = store.create(fields)?;
//!
//!     println!("created brief #{}", brief.id);
//!
//!     // Newest first, capped at ten records
//!     let recent = store.list(None, Some(10));
//!     println!("{} briefs on file", recent.len());
//!
//!     Ok(())
//! }
//! ```

pub mod pages;
pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

// Re-export top-level types for convenience
pub use store::{
    Brief, BriefStore, MemoryBackend, SortKey, StorageBackend, StoreError, StoreResult,
    DEFAULT_SORT, STORAGE_KEY,
};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileBackend;

pub use pages::{create_page_url, Page, ROOT_PATH};

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError, LoggingConfig, StorageConfig};

//! # Storage Layer
//!
//! This module defines the durable store for the address collection. The [`DataStore`]
//! trait allows the repository to work with different storage backends.
//!
//! ## One Key, Whole Collection
//!
//! The store is a key-value store with a single reserved key, [`COLLECTION_KEY`].
//! Its value is the entire collection, newest first, serialized as a JSON array.
//! There are no partial writes or merges: every save replaces the whole value.
//!
//! ## Tolerant Loads
//!
//! - **Absent** (first run): `load` returns `Ok(None)`.
//! - **Undecodable** (corrupted or foreign data): `load` returns
//!   [`CepError::CorruptState`](crate::error::CepError::CorruptState).
//!   The repository turns this into an empty collection and a warning; it never
//!   aborts the process. Before its first write it moves the unusable value to a
//!   backup with [`DataStore::set_aside`].
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: raw string I/O per key ("how").
//! - [`address_store::AddressStore`]: encoding and decoding of the collection ("what").
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store, `addresses.json` inside the data directory.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── addresses.json      # The collection
//! ├── addresses.json.bak  # Unreadable collection, set aside before an overwrite
//! └── cepbook.toml        # Optional configuration
//! ```

use crate::error::Result;
use crate::model::Address;
use std::path::PathBuf;

pub mod address_store;
pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// The reserved key holding the whole collection.
pub const COLLECTION_KEY: &str = "addresses";

/// Abstract interface for collection persistence.
pub trait DataStore {
    /// Overwrite the persisted collection.
    fn save(&mut self, addresses: &[Address]) -> Result<()>;

    /// Load the persisted collection, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<Address>>>;

    /// Remove the persisted collection entirely.
    fn delete(&mut self) -> Result<()>;

    /// Move the persisted value, as-is, to a backup beside it.
    /// Returns where the backup went, or `None` if nothing was stored.
    fn set_aside(&mut self) -> Result<Option<PathBuf>>;
}

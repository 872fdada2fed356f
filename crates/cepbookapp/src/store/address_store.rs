use super::backend::StorageBackend;
use super::{DataStore, COLLECTION_KEY};
use crate::error::{CepError, Result};
use crate::model::Address;
use std::path::PathBuf;

pub struct AddressStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> AddressStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Where the collection is persisted (for display and diagnostics).
    pub fn location(&self) -> PathBuf {
        self.backend.location(COLLECTION_KEY)
    }
}

impl<B: StorageBackend> DataStore for AddressStore<B> {
    fn save(&mut self, addresses: &[Address]) -> Result<()> {
        let encoded = serde_json::to_string_pretty(addresses)
            .map_err(|e| CepError::Persistence(format!("failed to encode collection: {}", e)))?;
        self.backend.write(COLLECTION_KEY, &encoded)
    }

    fn load(&self) -> Result<Option<Vec<Address>>> {
        let Some(raw) = self.backend.read(COLLECTION_KEY)? else {
            return Ok(None);
        };
        let addresses: Vec<Address> =
            serde_json::from_str(&raw).map_err(|e| CepError::CorruptState(e.to_string()))?;
        Ok(Some(addresses))
    }

    fn delete(&mut self) -> Result<()> {
        self.backend.remove(COLLECTION_KEY)
    }

    fn set_aside(&mut self) -> Result<Option<PathBuf>> {
        self.backend.set_aside(COLLECTION_KEY)
    }
}

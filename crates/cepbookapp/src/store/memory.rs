use super::address_store::AddressStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = AddressStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        AddressStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::address;
    use crate::model::Address;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persists `count` addresses, the last one created ends up first.
        pub fn with_addresses(mut self, count: usize) -> Self {
            let mut addresses: Vec<Address> = self.store.load().unwrap().unwrap_or_default();
            for i in 0..count {
                let cep = format!("{:08}", 10_000_000 + i);
                addresses.insert(0, address(&cep, &format!("City {}", i + 1), "SP"));
            }
            self.store.save(&addresses).unwrap();
            self
        }

        pub fn with_address(mut self, cep: &str, city: &str, state_code: &str) -> Self {
            let mut addresses: Vec<Address> = self.store.load().unwrap().unwrap_or_default();
            addresses.insert(0, address(cep, city, state_code));
            self.store.save(&addresses).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

use super::address_store::AddressStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = AddressStore<FsBackend>;

impl FileStore {
    pub fn new_fs(data_dir: PathBuf) -> Self {
        AddressStore::with_backend(FsBackend::new(data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::address;
    use crate::store::DataStore;

    #[test]
    fn persists_to_addresses_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new_fs(dir.path().to_path_buf());

        store
            .save(&[address("01001000", "São Paulo", "SP")])
            .unwrap();

        assert_eq!(store.location(), dir.path().join("addresses.json"));
        assert!(dir.path().join("addresses.json").exists());
    }
}

use cepbookapp::api::CepBookApi;
use cepbookapp::error::{CepError, ResolutionError};
use cepbookapp::lookup::{CepResolver, LookupRecord};
use cepbookapp::model::BookState;
use cepbookapp::repository::AddressBook;
use cepbookapp::store::backend::StorageBackend;
use cepbookapp::store::fs::FileStore;
use cepbookapp::store::fs_backend::FsBackend;
use cepbookapp::store::DataStore;
use std::fs;
use tempfile::TempDir;

struct TableResolver;

impl CepResolver for TableResolver {
    fn fetch(&self, cep: &str) -> Result<LookupRecord, ResolutionError> {
        let (street, city, state_code) = match cep {
            "01001000" => ("Praça da Sé", "São Paulo", "SP"),
            "20040002" => ("Rua da Assembleia", "Rio de Janeiro", "RJ"),
            _ => return Err(ResolutionError::NotFound(cep.to_string())),
        };
        Ok(LookupRecord {
            street: street.to_string(),
            city: city.to_string(),
            state_code: state_code.to_string(),
            ..Default::default()
        })
    }
}

#[test]
fn test_add_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut api = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));
    api.add_address(&TableResolver, "01001000").unwrap();
    api.add_address(&TableResolver, "20040002").unwrap();
    let before = api.book().addresses().to_vec();

    let reopened = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));

    assert_eq!(reopened.book().addresses(), before.as_slice());
    assert_eq!(reopened.book().addresses()[0].cep, "20040002");
    assert!(reopened.load_report().warning.is_none());
}

#[test]
fn test_collection_lives_in_addresses_json() {
    let dir = TempDir::new().unwrap();
    let mut api = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));
    api.add_address(&TableResolver, "01001000").unwrap();

    let raw = fs::read_to_string(dir.path().join("addresses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["cep"], "01001000");
    assert_eq!(value[0]["city"], "São Paulo");
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let mut api = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));
    api.add_address(&TableResolver, "01001000").unwrap();
    api.delete(&["1"]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["addresses.json".to_string()]);
}

#[test]
fn test_clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let mut api = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));
    api.add_address(&TableResolver, "01001000").unwrap();

    api.clear().unwrap();

    assert!(!dir.path().join("addresses.json").exists());
    let reopened = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));
    assert_eq!(reopened.state(), BookState::Empty);
}

#[test]
fn test_corrupt_file_is_backed_up_and_replaced_on_next_add() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("addresses.json"), "[{ this is not json").unwrap();

    let store = FileStore::new_fs(dir.path().to_path_buf());
    assert!(matches!(store.load(), Err(CepError::CorruptState(_))));

    let (mut book, report) = AddressBook::open(store);
    assert!(book.is_empty());
    assert!(report.warning.is_some());

    let address = cepbookapp::lookup::resolve(&TableResolver, "01001000").unwrap();
    book.add(address).unwrap();

    let reopened = FileStore::new_fs(dir.path().to_path_buf());
    assert_eq!(reopened.load().unwrap().unwrap().len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("addresses.json.bak")).unwrap(),
        "[{ this is not json"
    );
}

#[test]
fn test_not_found_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut api = CepBookApi::new(FileStore::new_fs(dir.path().to_path_buf()));

    let err = api.add_address(&TableResolver, "99999999").unwrap_err();

    assert!(matches!(
        err,
        CepError::Resolution(ResolutionError::NotFound(_))
    ));
    assert!(!dir.path().join("addresses.json").exists());
}

#[test]
fn test_backend_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.write("addresses", "[]").unwrap();

    assert_eq!(backend.read("addresses").unwrap(), Some("[]".to_string()));
    backend.remove("addresses").unwrap();
    backend.remove("addresses").unwrap();
    assert_eq!(backend.read("addresses").unwrap(), None);
}

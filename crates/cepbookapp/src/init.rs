//! # Initialization
//!
//! [`initialize`] wires everything a UI needs: the data directory, configuration,
//! the session and an API over the file store.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data-dir`), used as is.
//! 2. The `CEPBOOK_DATA` environment variable (primarily for testing).
//! 3. The OS-appropriate data directory via the `directories` crate.
//! 4. `./.cepbook` when the OS offers no home directory.
//!
//! The directory is not created here; the file store creates it on first write, so a
//! read-only `list` never leaves anything behind.
//!
//! ## Configuration
//!
//! `cepbook.toml` is looked up in the data directory and merged with `CEPBOOK__*`
//! environment variables. A missing or broken config falls back to defaults.

use crate::api::CepBookApi;
use crate::config::CepBookConfig;
use crate::lookup::ViaCepClient;
use crate::session::SessionContext;
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "CEPBOOK_DATA";

pub struct CepBookContext {
    pub api: CepBookApi<FileStore>,
    pub config: CepBookConfig,
    pub session: SessionContext,
    pub data_dir: PathBuf,
}

impl CepBookContext {
    /// The production resolver, built from configuration.
    pub fn resolver(&self) -> ViaCepClient {
        ViaCepClient::new(self.config.lookup_url.clone(), self.config.lookup_timeout())
    }
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> PathBuf {
    data_override
        .or_else(|| {
            std::env::var(DATA_ENV_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| {
            ProjectDirs::from("com", "cepbook", "cepbook").map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from(".cepbook"))
}

pub fn initialize(data_override: Option<PathBuf>) -> CepBookContext {
    let data_dir = resolve_data_dir(data_override);
    tracing::debug!(data_dir = %data_dir.display(), "initializing");

    let config: CepBookConfig = Clapfig::builder()
        .app_name("cepbook")
        .file_name("cepbook.toml")
        .search_paths(vec![SearchPath::Path(data_dir.clone())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default();

    let session = SessionContext::from_user_name(config.user_name());
    let api = CepBookApi::new(FileStore::new_fs(data_dir.clone()));

    CepBookContext {
        api,
        config,
        session,
        data_dir,
    }
}

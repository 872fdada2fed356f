use super::backend::StorageBackend;
use crate::error::{CepError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one JSON file per key under a single data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| io_failure("create", &self.root, e))?;
        }
        Ok(())
    }
}

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> CepError {
    CepError::Persistence(format!("failed to {} {}: {}", action, path.display(), err))
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_failure("read", &path, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.key_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(|e| io_failure("write", &tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(io_failure("replace", &target, e));
        }
        tracing::debug!(path = %target.display(), bytes = value.len(), "wrote store file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed store file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_failure("remove", &path, e)),
        }
    }

    fn set_aside(&self, key: &str) -> Result<Option<PathBuf>> {
        let path = self.key_path(key);
        let backup = self.root.join(format!("{}.json.bak", key));
        match fs::rename(&path, &backup) {
            Ok(()) => {
                tracing::debug!(from = %path.display(), to = %backup.display(), "set store file aside");
                Ok(Some(backup))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_failure("back up", &path, e)),
        }
    }

    fn location(&self, key: &str) -> PathBuf {
        self.key_path(key)
    }
}

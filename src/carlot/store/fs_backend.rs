use super::backend::KeyValueBackend;
use crate::error::{CarlotError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one file per key inside a data directory.
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

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
        let valid = !key.is_empty() && !key.starts_with('.') && key.chars().all(allowed);
        if !valid {
            let message = format!("Invalid storage key: {:?}", key);
            return Err(CarlotError::Store(message));
        }
        Ok(self.root.join(key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(tmp_path, value)?;
    fs::rename(tmp_path, path)
}

impl KeyValueBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_name = format!(".{}-{}.tmp", key, Uuid::new_v4());
        let tmp_path = self.root.join(tmp_name);
        if let Err(err) = write_then_rename(&tmp_path, &path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

//! FileStore: directory-backed key-value store
//!
//! Each key maps to one file `<dir>/<key>.blob`. Writes go to a temporary
//! file that is fsynced and renamed over the target, so a crash leaves
//! either the old or the new payload, never a torn one.
//!
//! Keys are restricted to ASCII letters, digits, `-`, `_` and `.` and may
//! not start with `.`; anything else is rejected before touching the disk.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use safetysync_core::{Error, Result};

use crate::traits::{Blob, KeyValueStore};

const BLOB_EXTENSION: &str = "blob";

/// Directory-backed key-value store
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::storage("empty key"));
    }
    if key.starts_with('.') {
        return Err(Error::storage(format!("key '{}' may not start with '.'", key)));
    }
    let valid = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid {
        return Err(Error::storage(format!("key '{}' contains unsupported characters", key)));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Blob>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(Blob::new(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, blob: Blob) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("tmp");

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(blob.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;

        if let Ok(dir) = File::open(&self.dir) {
            // Directory fsync is unsupported on some platforms
            let _ = dir.sync_all();
        }

        debug!(key, bytes = blob.len(), "saved blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key)?.exists())
    }
}

//! Workspace: configuration plus persisted UI state
//!
//! A workspace is a data directory holding `safetysync.toml` and, when
//! `storage = "file"`, a `state/` directory with one file per stored key.
//! Opening a fresh directory creates both with defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use safetysync_core::{Error, Result};
use safetysync_dashboard::LayoutManager;
use safetysync_storage::{FileStore, KeyValueStore, MemoryStore};
use safetysync_views::TrainingStatusRule;

use crate::config::{SafetySyncConfig, StorageMode, CONFIG_FILE_NAME};
use crate::quick_search::QuickSearch;

/// Subdirectory of the data directory used by the file store
pub const STATE_DIR: &str = "state";

/// Shared handle to the configured store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Opened data directory
pub struct Workspace {
    data_dir: Option<PathBuf>,
    config: SafetySyncConfig,
    store: SharedStore,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("data_dir", &self.data_dir)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    /// Open (or create) a workspace in `data_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, or the config
    /// file cannot be written, read or validated.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|e| {
            Error::config(format!(
                "Failed to create data directory '{}': {}",
                data_dir.display(),
                e
            ))
        })?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        SafetySyncConfig::write_default_if_missing(&config_path)?;
        let config = SafetySyncConfig::from_file(&config_path)?;

        let store: SharedStore = match config.storage_mode()? {
            StorageMode::File => Arc::new(FileStore::open(data_dir.join(STATE_DIR))?),
            StorageMode::Memory => Arc::new(MemoryStore::new()),
        };
        info!(dir = %data_dir.display(), storage = %config.storage, "opened workspace");

        Ok(Workspace {
            data_dir: Some(data_dir.to_path_buf()),
            config,
            store,
        })
    }

    /// Workspace with default settings and no files
    pub fn in_memory() -> Self {
        debug!("opened in-memory workspace");
        Workspace {
            data_dir: None,
            config: SafetySyncConfig::default(),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Data directory, if backed by one
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Loaded configuration
    pub fn config(&self) -> &SafetySyncConfig {
        &self.config
    }

    /// Shared handle to the store
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Dashboard layout restored from the store
    pub fn layout(&self) -> LayoutManager<SharedStore> {
        LayoutManager::open(self.store())
    }

    /// Training status rule using the configured window
    pub fn training_rule(&self) -> TrainingStatusRule {
        self.config.training_rule()
    }

    /// Quick search using the configured limit
    pub fn quick_search(&self) -> QuickSearch {
        self.config.quick_search()
    }
}

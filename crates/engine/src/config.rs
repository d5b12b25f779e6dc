//! Workspace configuration via `safetysync.toml`
//!
//! On first open, a default `safetysync.toml` with comments is written into
//! the data directory. To change settings, edit the file and rerun.

use serde::{Deserialize, Serialize};
use std::path::Path;

use safetysync_core::{Error, Result};
use safetysync_views::{TrainingStatusRule, DEFAULT_EXPIRING_WINDOW_DAYS};

use crate::quick_search::QuickSearch;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "safetysync.toml";

/// Default number of quick-search results.
pub const DEFAULT_QUICK_SEARCH_LIMIT: usize = 8;

/// Where persisted UI state lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// One file per key under the data directory
    File,
    /// Process-local; nothing survives exit
    Memory,
}

/// Workspace configuration loaded from `safetysync.toml`.
///
/// # Example
///
/// ```toml
/// expiring_window_days = 30
/// quick_search_limit = 8
/// storage = "file"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySyncConfig {
    /// Days ahead of `as_of` that count as "expiring soon".
    #[serde(default = "default_expiring_window_days")]
    pub expiring_window_days: u32,
    /// Maximum quick-search results.
    #[serde(default = "default_quick_search_limit")]
    pub quick_search_limit: usize,
    /// Storage backend: `"file"` or `"memory"`.
    #[serde(default = "default_storage_str")]
    pub storage: String,
}

fn default_expiring_window_days() -> u32 {
    DEFAULT_EXPIRING_WINDOW_DAYS
}

fn default_quick_search_limit() -> usize {
    DEFAULT_QUICK_SEARCH_LIMIT
}

fn default_storage_str() -> String {
    "file".to_string()
}

impl Default for SafetySyncConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: default_expiring_window_days(),
            quick_search_limit: default_quick_search_limit(),
            storage: default_storage_str(),
        }
    }
}

impl SafetySyncConfig {
    /// Parse the storage string into a `StorageMode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"file"` or `"memory"`.
    pub fn storage_mode(&self) -> Result<StorageMode> {
        match self.storage.as_str() {
            "file" => Ok(StorageMode::File),
            "memory" => Ok(StorageMode::Memory),
            other => Err(Error::config(format!(
                "Invalid storage '{}' in {}. Expected \"file\" or \"memory\".",
                other, CONFIG_FILE_NAME
            ))),
        }
    }

    /// Check every value, not just the storage string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.storage_mode()?;
        if self.quick_search_limit == 0 {
            return Err(Error::config(format!(
                "quick_search_limit in {} must be at least 1",
                CONFIG_FILE_NAME
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# SafetySync workspace configuration
#
# Days ahead that count as "expiring soon" for certificates (default: 30)
expiring_window_days = 30

# Maximum results shown by the employee quick search (default: 8)
quick_search_limit = 8

# Where dashboard layout and selections are kept: "file" (default) or "memory"
#   "file"   = one JSON file per key in this directory
#   "memory" = nothing is kept after the process exits
storage = "file"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: SafetySyncConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read config from `path` if the file exists, defaults otherwise.
    ///
    /// Never creates the file.
    pub fn load_if_present(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Training status rule using the configured window
    pub fn training_rule(&self) -> TrainingStatusRule {
        TrainingStatusRule::with_window_days(self.expiring_window_days)
    }

    /// Quick search using the configured limit
    pub fn quick_search(&self) -> QuickSearch {
        QuickSearch::with_limit(self.quick_search_limit)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

//! Page configuration
//!
//! Loaded from `config.json` in the platform config directory, or from an
//! explicit path supplied by the host.

mod settings;

pub use settings::PageConfig;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::storage::{FlagStore, JsonFileStore, MemoryStore};

/// Configuration load failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PageConfig {
    /// Get the platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from `path`, or return defaults if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load config from the platform config directory
    ///
    /// Falls back to defaults when the directory is unknown or the file is
    /// missing or invalid.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default page config");
            Self::default()
        })
    }

    /// Open the flag store this config points at
    ///
    /// Without a configured path or a platform config directory the flags
    /// only live in memory.
    pub fn open_store(&self) -> Box<dyn FlagStore> {
        match self
            .storage_path
            .clone()
            .or_else(JsonFileStore::default_path)
        {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }
}

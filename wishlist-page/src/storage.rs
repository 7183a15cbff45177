//! Client-local flag storage
//!
//! Page flags are JSON booleans stored under fixed keys. Reads are tolerant:
//! a missing key, an unreadable store or a value that is not a JSON boolean
//! all read as `false`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{APP_DIR_NAME, STORAGE_FILE_NAME};

/// File permissions for the storage file on Unix (owner read/write only)
#[cfg(unix)]
const STORAGE_FILE_MODE: u32 = 0o600;

/// Storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key/value string store (browser local storage or an equivalent)
pub trait FlagStore: Send {
    /// Raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read a boolean flag, treating every failure as `false`
pub fn read_flag(store: &dyn FlagStore, key: &str) -> bool {
    match store.read(key) {
        Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or(false),
        Ok(None) => false,
        Err(e) => {
            tracing::debug!(key, error = %e, "flag read failed");
            false
        }
    }
}

/// Write a boolean flag as a JSON boolean
pub fn write_flag(store: &mut dyn FlagStore, key: &str, value: bool) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&value)?;
    store.write(key, &raw)
}

// =============================================================================
// In-memory store
// =============================================================================

/// Store that lives as long as the page
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value (test and standalone setup)
    pub fn with(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.values.insert(key.into(), raw.into());
        self
    }
}

impl FlagStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// JSON file store
// =============================================================================

/// Store backed by a single JSON object file
///
/// The file is re-read on every access so several pages sharing a path see
/// each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the platform-specific storage file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Set storage file permissions to owner read/write only on Unix systems
    #[cfg(unix)]
    fn set_file_permissions(&self) -> Result<(), StorageError> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&self.path)?.permissions();
        perms.set_mode(STORAGE_FILE_MODE);
        fs::set_permissions(&self.path, perms)?;
        Ok(())
    }
}

impl FlagStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking the write
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;

        #[cfg(unix)]
        self.set_file_permissions()?;

        Ok(())
    }
}

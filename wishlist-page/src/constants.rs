//! Application-wide constants
//!
//! Shared constants used across multiple modules.

/// Application directory name (used in config directory path)
pub const APP_DIR_NAME: &str = "wishlist";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Client-local storage file name
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Storage key for the fail-mode flag
pub const FAIL_MODE_KEY: &str = "wishlist.failMode";

/// Storage key for the admin diagnostics panel open state
pub const DIAGNOSTICS_PANEL_KEY: &str = "wishlist.diagnosticsPanelOpen";

/// Default cap on the clicked-element label carried in fail-mode logs
pub const DEFAULT_LABEL_MAX_CHARS: usize = 80;

//! Page settings supplied at composition time

use std::path::PathBuf;

use wishlist_common::HostContext;

use crate::constants::DEFAULT_LABEL_MAX_CHARS;

/// Composition-time page settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageConfig {
    /// Shell the page is rendered inside
    #[serde(default)]
    pub host: HostContext,

    /// Storage file location
    /// Defaults to the platform config directory if not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Cap on clicked-element labels in fail-mode logs
    #[serde(default = "default_label_max_chars")]
    pub label_max_chars: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            host: HostContext::default(),
            storage_path: None,
            label_max_chars: default_label_max_chars(),
        }
    }
}

fn default_label_max_chars() -> usize {
    DEFAULT_LABEL_MAX_CHARS
}

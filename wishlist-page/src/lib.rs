//! Wishlist page
//!
//! Headless controller for the Wishlist page: permission-gated item actions,
//! move-to-cart, and the admin fail-mode switch used to exercise error
//! reporting. The host shell draws [`PageView`]s and forwards clicks.

pub mod actions;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod dom;
pub mod fail_mode;
pub mod notifications;
mod page;
pub mod resolver;
pub mod storage;
pub mod types;
pub mod visibility;

pub use actions::{CartError, NoopActions, WishlistActions};
pub use config::{ConfigError, PageConfig};
pub use diagnostics::{
    DiagnosticContext, DiagnosticSink, ErrorRecord, Level, NoopSink, TracingSink,
};
pub use dom::{Element, ElementId, ElementKind, ElementTree};
pub use fail_mode::{BlockedClick, FailMode, Interception, ListEntry};
pub use notifications::{NoopNotifier, Notifier};
pub use page::{PageProps, WishlistPage};
pub use resolver::PermissionResolver;
pub use storage::{FlagStore, JsonFileStore, MemoryStore, StorageError};
pub use types::{ClickOutcome, DiagnosticsPanelView, ItemRow, Message, PageView, RowView};
pub use visibility::{ActionGate, ActionKind, ItemActions, gate_actions};

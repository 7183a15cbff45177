//! Wishlist page controller
//!
//! Owns the page's session state (permission diagnostics, fail mode, panel
//! state) and the current props. Each call to [`WishlistPage::render`]
//! produces a fresh [`PageView`]; clicks on that view go through
//! [`WishlistPage::click`].

mod handlers;
mod render;

use std::sync::Arc;

use wishlist_common::{Item, User};

use crate::actions::{NoopActions, WishlistActions};
use crate::config::PageConfig;
use crate::constants::DIAGNOSTICS_PANEL_KEY;
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::fail_mode::FailMode;
use crate::notifications::{NoopNotifier, Notifier};
use crate::resolver::PermissionResolver;
use crate::storage::{FlagStore, MemoryStore, read_flag};

/// Inputs supplied by the hosting shell
///
/// Every field has a safe default so the page renders standalone.
pub struct PageProps {
    pub items: Vec<Item>,
    pub user: User,
    pub config: PageConfig,
    pub actions: Arc<dyn WishlistActions>,
    pub notifier: Arc<dyn Notifier>,
    pub sink: Arc<dyn DiagnosticSink>,
    pub store: Box<dyn FlagStore>,
}

impl Default for PageProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            user: User::default(),
            config: PageConfig::default(),
            actions: Arc::new(NoopActions),
            notifier: Arc::new(NoopNotifier),
            sink: Arc::new(NoopSink),
            store: Box::new(MemoryStore::new()),
        }
    }
}

impl PageProps {
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_actions(mut self, actions: Arc<dyn WishlistActions>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_store(mut self, store: Box<dyn FlagStore>) -> Self {
        self.store = store;
        self
    }
}

/// The mounted Wishlist page
pub struct WishlistPage {
    items: Vec<Item>,
    user: User,
    config: PageConfig,
    actions: Arc<dyn WishlistActions>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn DiagnosticSink>,
    store: Box<dyn FlagStore>,
    resolver: PermissionResolver,
    fail_mode: FailMode,
    diagnostics_open: bool,
}

impl WishlistPage {
    /// Mount the page, reading persisted flags once
    pub fn mount(props: PageProps) -> Self {
        let fail_mode = FailMode::load(props.store.as_ref());
        let diagnostics_open = read_flag(props.store.as_ref(), DIAGNOSTICS_PANEL_KEY);
        if fail_mode.is_enabled() {
            tracing::warn!("wishlist mounted with fail mode enabled");
        }
        Self {
            items: props.items,
            user: props.user,
            config: props.config,
            actions: props.actions,
            notifier: props.notifier,
            sink: props.sink,
            store: props.store,
            resolver: PermissionResolver::new(),
            fail_mode,
            diagnostics_open,
        }
    }

    /// Replace the item list (host pushed new props)
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Replace the current user (host pushed new props)
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn fail_mode(&self) -> &FailMode {
        &self.fail_mode
    }

    pub fn resolver(&self) -> &PermissionResolver {
        &self.resolver
    }

    pub fn store(&self) -> &dyn FlagStore {
        self.store.as_ref()
    }

    pub fn is_diagnostics_open(&self) -> bool {
        self.diagnostics_open
    }

    /// Clear session state: the fail-mode rotation and reported users
    pub fn reset_session(&mut self) {
        self.fail_mode.reset_rotation();
        self.resolver.reset();
    }
}

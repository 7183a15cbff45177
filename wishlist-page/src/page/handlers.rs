//! Click and message handlers

use wishlist_common::{Item, PERMISSION_WISHLIST_DELETE, PERMISSION_WISHLIST_REMOVE};

use super::WishlistPage;
use crate::constants::DIAGNOSTICS_PANEL_KEY;
use crate::dom::ElementId;
use crate::fail_mode::Interception;
use crate::notifications::{MSG_MOVE_TO_CART_FAILED, MSG_MOVED_TO_CART};
use crate::resolver::PermissionResolver;
use crate::storage::write_flag;
use crate::types::{ClickOutcome, Message, PageView};

impl WishlistPage {
    /// Handle a click on `target` in `view`
    ///
    /// Fail mode sees the click first (capture phase). If it lets the click
    /// through, the action of the nearest actionable element is dispatched.
    pub async fn click(&mut self, view: &PageView, target: ElementId) -> ClickOutcome {
        let interception = self.fail_mode.intercept(
            &view.tree,
            target,
            self.sink.as_ref(),
            self.config.label_max_chars,
        );
        if let Interception::Blocked(blocked) = interception {
            return ClickOutcome::Blocked(blocked);
        }

        let Some(message) = view
            .tree
            .nearest_actionable(target)
            .and_then(|id| view.tree.get(id))
            .and_then(|element| element.action.clone())
        else {
            return ClickOutcome::Ignored;
        };

        self.update(message.clone()).await;
        ClickOutcome::Dispatched(message)
    }

    /// Apply a message to the page state
    pub async fn update(&mut self, message: Message) {
        match message {
            Message::Remove(item_id) => self.handle_remove(&item_id),
            Message::Delete(item_id) => self.handle_delete(&item_id),
            Message::MoveToCart(item) => self.handle_move_to_cart(item).await,
            Message::ClearAll => self.handle_clear_all(),
            Message::SetFailMode(enabled) => self.handle_set_fail_mode(enabled),
            Message::ToggleDiagnosticsPanel => self.handle_toggle_diagnostics_panel(),
        }
    }

    fn handle_remove(&mut self, item_id: &str) {
        if self.config.host.is_admin()
            && !PermissionResolver::has_permission(&self.user, PERMISSION_WISHLIST_REMOVE)
        {
            tracing::warn!(item_id, "remove ignored: missing permission");
            return;
        }
        self.remove_local(item_id);
        self.actions.remove(item_id);
    }

    fn handle_delete(&mut self, item_id: &str) {
        if !self.config.host.is_admin()
            || !PermissionResolver::has_permission(&self.user, PERMISSION_WISHLIST_DELETE)
        {
            tracing::warn!(item_id, "delete ignored: not permitted");
            return;
        }
        self.remove_local(item_id);
        self.actions.delete(item_id);
    }

    /// Add `item` to the cart, then drop it from the list
    ///
    /// The item is looked up again by id, or by value when it has none, so a
    /// click from an older view never moves a different entry. A rejected add
    /// leaves the list untouched.
    async fn handle_move_to_cart(&mut self, item: Item) {
        if self.position_of(&item).is_none() {
            tracing::warn!(title = %item.title, "move to cart ignored: item no longer listed");
            return;
        }

        let actions = self.actions.clone();
        match actions.add_to_cart(&item).await {
            Ok(()) => {
                if let Some(index) = self.position_of(&item) {
                    self.items.remove(index);
                }
                if let Some(item_id) = item.actionable_id() {
                    self.actions.remove(item_id);
                }
                self.notifier.success(MSG_MOVED_TO_CART);
            }
            Err(e) => {
                tracing::warn!(title = %item.title, error = %e, "move to cart failed");
                self.notifier.error(MSG_MOVE_TO_CART_FAILED);
            }
        }
    }

    fn handle_clear_all(&mut self) {
        if !self.resolver.can_edit(&self.user, self.sink.as_ref()) {
            tracing::warn!("clear ignored: missing permission");
            return;
        }
        self.items.clear();
        self.actions.clear();
    }

    fn handle_set_fail_mode(&mut self, enabled: bool) {
        if !self.config.host.is_admin() {
            tracing::warn!("fail mode toggle ignored outside the admin host");
            return;
        }
        self.fail_mode.set_enabled(enabled, self.store.as_mut());
    }

    fn handle_toggle_diagnostics_panel(&mut self) {
        if !self.config.host.is_admin() {
            return;
        }
        self.diagnostics_open = !self.diagnostics_open;
        let open = self.diagnostics_open;
        if let Err(e) = write_flag(self.store.as_mut(), DIAGNOSTICS_PANEL_KEY, open) {
            tracing::debug!(error = %e, "failed to persist diagnostics panel state");
        }
    }

    fn position_of(&self, item: &Item) -> Option<usize> {
        match item.actionable_id() {
            Some(item_id) => self
                .items
                .iter()
                .position(|i| i.actionable_id() == Some(item_id)),
            None => self.items.iter().position(|i| i == item),
        }
    }

    fn remove_local(&mut self, item_id: &str) {
        self.items.retain(|item| item.id.as_deref() != Some(item_id));
    }
}

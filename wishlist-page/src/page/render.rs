//! Page rendering

use wishlist_common::Item;

use super::WishlistPage;
use crate::diagnostics::{DiagnosticContext, Level};
use crate::dom::{Element, ElementId, ElementKind, ElementTree};
use crate::fail_mode::ListEntry;
use crate::notifications::MSG_PERMISSION_DENIED;
use crate::types::{DiagnosticsPanelView, ItemRow, Message, PageView, RowView};
use crate::visibility::{ActionGate, ItemActions, gate_actions};

/// Text shown for rows that could not be read
pub const UNAVAILABLE_ROW_TEXT: &str = "Item unavailable";

impl WishlistPage {
    /// Build the render model for the current state
    ///
    /// Rendering never fails. Side effects: the once-per-user permission
    /// diagnostic, and a "Permission denied" notification plus diagnostic for
    /// every admin-host action hidden on this pass.
    pub fn render(&mut self) -> PageView {
        let mut tree = ElementTree::new();
        let root = tree.push(Element::container());

        let can_edit = self.resolver.can_edit(&self.user, self.sink.as_ref());
        let clear_all_button = (can_edit && !self.items.is_empty()).then(|| {
            tree.push(
                Element::button(Message::ClearAll)
                    .with_text("Clear all")
                    .under(root),
            )
        });

        let diagnostics = self
            .config
            .host
            .is_admin()
            .then(|| self.render_diagnostics_panel(&mut tree, root));

        let list = tree.push(Element::container().under(root));
        let rows: Vec<RowView> = self
            .fail_mode
            .displayed_entries(&self.items)
            .into_iter()
            .map(|entry| self.render_entry(&mut tree, list, entry))
            .collect();

        PageView {
            tree,
            root,
            rows,
            can_edit,
            clear_all_button,
            diagnostics,
        }
    }

    fn render_diagnostics_panel(
        &self,
        tree: &mut ElementTree,
        root: ElementId,
    ) -> DiagnosticsPanelView {
        let panel = tree.push(Element::container().exempt().under(root));
        let header = tree.push(
            Element::button(Message::ToggleDiagnosticsPanel)
                .with_text("Diagnostics")
                .exempt()
                .under(panel),
        );
        let fail_mode = self.fail_mode.is_enabled();
        let fail_mode_toggle = self.diagnostics_open.then(|| {
            tree.push(
                Element::new(ElementKind::Checkbox)
                    .with_action(Message::SetFailMode(!fail_mode))
                    .with_text("Fail mode")
                    .exempt()
                    .under(panel),
            )
        });
        DiagnosticsPanelView {
            open: self.diagnostics_open,
            fail_mode,
            header,
            fail_mode_toggle,
        }
    }

    /// Entries of unknown shape only render if they read as an item, and
    /// then without actions
    fn render_entry(
        &self,
        tree: &mut ElementTree,
        list: ElementId,
        entry: ListEntry,
    ) -> RowView {
        match entry {
            ListEntry::Item(item) => RowView::Item(self.render_item(tree, list, item, true)),
            ListEntry::Opaque(value) => match serde_json::from_value::<Item>(value) {
                Ok(item) => RowView::Item(self.render_item(tree, list, item, false)),
                Err(e) => {
                    self.sink.log_exception(
                        &e,
                        &DiagnosticContext::new()
                            .with_user(self.user.diagnostic_key())
                            .with_action("render_row"),
                    );
                    let element = tree.push(
                        Element::container()
                            .with_text(UNAVAILABLE_ROW_TEXT)
                            .under(list),
                    );
                    RowView::Unavailable { element }
                }
            },
        }
    }

    /// Rows that are not `actionable` are read-only
    fn render_item(
        &self,
        tree: &mut ElementTree,
        list: ElementId,
        item: Item,
        actionable: bool,
    ) -> ItemRow {
        let host = self.config.host;
        let gate = if actionable {
            gate_actions(&item, &self.user, host)
        } else {
            ActionGate::default()
        };
        self.report_denied(&gate, &item);

        let element = tree.push(Element::container().under(list));
        tree.push(Element::text(item.title.clone()).under(element));
        tree.push(Element::text(item.category.clone()).under(element));
        tree.push(Element::text(format!("{:.2}", item.price)).under(element));

        let added_by = item.added_by.clone().filter(|_| host.is_admin());
        if let Some(who) = &added_by {
            tree.push(Element::text(format!("Added by {}", who)).under(element));
        }

        let id = item.actionable_id().map(str::to_string);
        let remove_button = id
            .clone()
            .filter(|_| gate.actions.remove)
            .map(|id| push_button(tree, element, Message::Remove(id), "Remove"));
        let delete_button = id
            .filter(|_| gate.actions.delete)
            .map(|id| push_button(tree, element, Message::Delete(id), "Delete"));
        let move_to_cart_button = gate.actions.move_to_cart.then(|| {
            push_button(
                tree,
                element,
                Message::MoveToCart(item.clone()),
                "Move to cart",
            )
        });

        ItemRow {
            actions: ItemActions {
                remove: remove_button.is_some(),
                delete: delete_button.is_some(),
                move_to_cart: move_to_cart_button.is_some(),
            },
            item,
            added_by,
            element,
            remove_button,
            delete_button,
            move_to_cart_button,
        }
    }

    /// Hidden admin actions are reported on every render
    fn report_denied(&self, gate: &ActionGate, item: &Item) {
        for (kind, permission) in &gate.denied {
            self.notifier.error(MSG_PERMISSION_DENIED);
            let mut context = DiagnosticContext::new()
                .with_user(self.user.diagnostic_key())
                .with_action(kind.to_string())
                .with_permission(*permission);
            if let Some(id) = item.actionable_id() {
                context = context.with_item_id(id);
            }
            self.sink.log_message(
                &format!("{} hidden: missing {}", kind, permission),
                Level::Warning,
                &context,
            );
        }
    }
}

fn push_button(
    tree: &mut ElementTree,
    parent: ElementId,
    action: Message,
    text: &str,
) -> ElementId {
    tree.push(Element::button(action).with_text(text).under(parent))
}

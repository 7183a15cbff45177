//! Render model handed to the host shell

use wishlist_common::Item;

use super::Message;
use crate::dom::{ElementId, ElementTree};
use crate::fail_mode::BlockedClick;
use crate::visibility::{ActionKind, ItemActions};

/// A row for a readable item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    pub actions: ItemActions,
    /// Who added the entry (admin host only)
    pub added_by: Option<String>,
    pub element: ElementId,
    pub remove_button: Option<ElementId>,
    pub delete_button: Option<ElementId>,
    pub move_to_cart_button: Option<ElementId>,
}

impl ItemRow {
    /// Button element for `kind`, if shown
    pub fn button(&self, kind: ActionKind) -> Option<ElementId> {
        match kind {
            ActionKind::Remove => self.remove_button,
            ActionKind::Delete => self.delete_button,
            ActionKind::MoveToCart => self.move_to_cart_button,
        }
    }
}

/// A rendered list row
#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    Item(ItemRow),
    /// Entry that could not be read as an item
    Unavailable { element: ElementId },
}

/// Admin-only diagnostics panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsPanelView {
    pub open: bool,
    pub fail_mode: bool,
    pub header: ElementId,
    /// Fail-mode checkbox, present while the panel is open
    pub fail_mode_toggle: Option<ElementId>,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub tree: ElementTree,
    pub root: ElementId,
    pub rows: Vec<RowView>,
    /// Whether the clear-all affordance is offered
    pub can_edit: bool,
    pub clear_all_button: Option<ElementId>,
    pub diagnostics: Option<DiagnosticsPanelView>,
}

impl PageView {
    /// Row for the item with `item_id`
    pub fn row(&self, item_id: &str) -> Option<&ItemRow> {
        self.rows.iter().find_map(|row| match row {
            RowView::Item(r) if r.item.id.as_deref() == Some(item_id) => Some(r),
            _ => None,
        })
    }

    /// Button for `kind` on the row with `item_id`
    pub fn button(&self, item_id: &str, kind: ActionKind) -> Option<ElementId> {
        self.row(item_id).and_then(|r| r.button(kind))
    }
}

/// What a click ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Swallowed by fail mode
    Blocked(BlockedClick),
    /// Passed through and dispatched
    Dispatched(Message),
    /// Passed through with nothing to dispatch
    Ignored,
}

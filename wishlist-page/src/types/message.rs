//! Message types for the Elm-style page update loop

use wishlist_common::Item;

/// Messages that drive the page state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Item row: Remove button pressed
    Remove(String),
    /// Item row: Delete button pressed (admin host only)
    Delete(String),
    /// Item row: Move to cart button pressed
    ///
    /// Carries the item as rendered; items without an id are matched by value.
    MoveToCart(Item),
    /// Header: Clear all button pressed
    ClearAll,
    /// Diagnostics panel: fail-mode checkbox toggled
    SetFailMode(bool),
    /// Diagnostics panel: header pressed
    ToggleDiagnosticsPanel,
}

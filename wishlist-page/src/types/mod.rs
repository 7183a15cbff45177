//! Type definitions for the Wishlist page

mod message;
mod view;

pub use message::Message;
pub use view::{ClickOutcome, DiagnosticsPanelView, ItemRow, PageView, RowView};

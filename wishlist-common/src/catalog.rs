//! Canned logical errors raised by fail mode
//!
//! The catalog order is fixed; callers pick entries round-robin with
//! [`logical_error`].

/// A synthetic error descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalError {
    /// Machine-readable code
    pub code: &'static str,
    /// Human-readable message
    pub message: &'static str,
}

/// The fixed catalog, in rotation order
pub const LOGICAL_ERRORS: &[LogicalError] = &[
    LogicalError {
        code: "WISHLIST_STATE_DESYNC",
        message: "Wishlist state is out of sync with the server",
    },
    LogicalError {
        code: "CART_PRICE_MISMATCH",
        message: "Cart price does not match the listed price",
    },
    LogicalError {
        code: "INVENTORY_NEGATIVE",
        message: "Inventory count dropped below zero",
    },
    LogicalError {
        code: "DUPLICATE_ENTRY",
        message: "Wishlist contains a duplicate entry",
    },
    LogicalError {
        code: "SESSION_USER_MISMATCH",
        message: "Action user does not match the session user",
    },
];

/// Entry at `index`, wrapping around the end of the catalog
pub fn logical_error(index: u64) -> LogicalError {
    LOGICAL_ERRORS[(index % LOGICAL_ERRORS.len() as u64) as usize]
}

//! User-visible notifications
//!
//! The host shell shows these as toasts. Hosts without a toast surface pass
//! [`NoopNotifier`].

/// Shown whenever an admin-host action is hidden for lack of permission
pub const MSG_PERMISSION_DENIED: &str = "Permission denied";

/// Shown after an item was moved to the cart
pub const MSG_MOVED_TO_CART: &str = "Moved to cart";

/// Shown when adding an item to the cart failed
pub const MSG_MOVE_TO_CART_FAILED: &str = "Could not move item to cart";

/// Toast surface provided by the host
pub trait Notifier: Send + Sync {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Notifier that shows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

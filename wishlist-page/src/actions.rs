//! Host-provided wishlist operations
//!
//! The hosting shell owns the authoritative list and the cart. The page calls
//! back into it through [`WishlistActions`].

use async_trait::async_trait;
use thiserror::Error;

use wishlist_common::Item;

/// Failure reported by the host's add-to-cart operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("item is out of stock")]
    OutOfStock,
    #[error("cart service unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Rejected(String),
}

/// Callbacks supplied by the hosting shell
///
/// All methods default to no-ops so the page renders standalone.
#[async_trait]
pub trait WishlistActions: Send + Sync {
    /// Remove an entry from the wishlist
    fn remove(&self, _item_id: &str) {}

    /// Permanently delete an entry (admin host)
    fn delete(&self, _item_id: &str) {}

    /// Remove every entry
    fn clear(&self) {}

    /// Add an item to the cart
    ///
    /// No timeout is applied by the page; a future that never settles leaves
    /// the interaction pending.
    async fn add_to_cart(&self, _item: &Item) -> Result<(), CartError> {
        Ok(())
    }
}

/// Actions that do nothing and always succeed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActions;

#[async_trait]
impl WishlistActions for NoopActions {}

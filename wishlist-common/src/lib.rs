//! Wishlist Common Library
//!
//! Shared types for the Wishlist page: permission shapes and normalization,
//! user and item models, and the logical error catalog.

pub mod catalog;
pub mod models;
pub mod permissions;

pub use catalog::{LOGICAL_ERRORS, LogicalError, logical_error};
pub use models::{HostContext, Item, User};
pub use permissions::{
    ALL_PERMISSIONS, PERMISSION_EDIT, PERMISSION_WISHLIST_DELETE, PERMISSION_WISHLIST_REMOVE,
    RawPermissions, resolve_permissions,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_permissions_sorted() {
        let mut sorted = ALL_PERMISSIONS.to_vec();
        sorted.sort();
        assert_eq!(ALL_PERMISSIONS, sorted.as_slice());
    }

    #[test]
    fn test_all_permissions_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for perm in ALL_PERMISSIONS {
            assert!(seen.insert(perm), "Duplicate permission: {}", perm);
        }
    }

    #[test]
    fn test_named_permissions_are_known() {
        for perm in [
            PERMISSION_EDIT,
            PERMISSION_WISHLIST_DELETE,
            PERMISSION_WISHLIST_REMOVE,
        ] {
            assert!(ALL_PERMISSIONS.contains(&perm), "{} missing", perm);
        }
    }
}

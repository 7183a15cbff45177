//! Per-item action visibility

use strum::{AsRefStr, Display};

use wishlist_common::{
    HostContext, Item, PERMISSION_WISHLIST_DELETE, PERMISSION_WISHLIST_REMOVE, User,
};

use crate::resolver::PermissionResolver;

/// Action offered on a wishlist row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Remove,
    Delete,
    MoveToCart,
}

impl ActionKind {
    /// Permission checked for this action in the admin host
    pub fn required_permission(&self) -> Option<&'static str> {
        match self {
            Self::Remove => Some(PERMISSION_WISHLIST_REMOVE),
            Self::Delete => Some(PERMISSION_WISHLIST_DELETE),
            Self::MoveToCart => None,
        }
    }
}

/// Which actions a row shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemActions {
    pub remove: bool,
    pub delete: bool,
    pub move_to_cart: bool,
}

/// Visibility decision for one row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionGate {
    pub actions: ItemActions,
    /// Actions hidden for lack of permission, with the permission required
    pub denied: Vec<(ActionKind, &'static str)>,
}

/// Decide which actions `item` offers to `user` inside `host`
///
/// - Remove: needs an identifier; in the admin host also `WISHLIST_REMOVE`.
/// - Delete: admin host only; needs an identifier and `WISHLIST_DELETE`.
/// - Move to cart: always shown.
///
/// Permissions use the literal-list rule of [`PermissionResolver::has_permission`].
pub fn gate_actions(item: &Item, user: &User, host: HostContext) -> ActionGate {
    let mut gate = ActionGate {
        actions: ItemActions {
            move_to_cart: true,
            ..Default::default()
        },
        denied: Vec::new(),
    };

    if item.actionable_id().is_none() {
        return gate;
    }

    if !host.is_admin() {
        gate.actions.remove = true;
        return gate;
    }

    for kind in [ActionKind::Remove, ActionKind::Delete] {
        let Some(permission) = kind.required_permission() else {
            continue;
        };
        let allowed = PermissionResolver::has_permission(user, permission);
        match kind {
            ActionKind::Remove => gate.actions.remove = allowed,
            ActionKind::Delete => gate.actions.delete = allowed,
            ActionKind::MoveToCart => {}
        }
        if !allowed {
            gate.denied.push((kind, permission));
        }
    }

    gate
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_common::RawPermissions;

    fn item() -> Item {
        Item::new("sku-1", "Lamp", "Home", 20.0)
    }

    fn user(perms: &[&str]) -> User {
        User::new("u1", RawPermissions::list(perms.iter().copied()))
    }

    #[test]
    fn test_storefront_ignores_permissions() {
        let gate = gate_actions(&item(), &user(&[]), HostContext::Storefront);
        assert_eq!(
            gate.actions,
            ItemActions {
                remove: true,
                delete: false,
                move_to_cart: true
            }
        );
        assert!(gate.denied.is_empty());
    }

    #[test]
    fn test_storefront_without_id() {
        let mut item = item();
        item.id = None;
        let gate = gate_actions(&item, &user(&[]), HostContext::Storefront);
        assert!(!gate.actions.remove);
        assert!(gate.actions.move_to_cart);
    }

    #[test]
    fn test_admin_with_permissions() {
        let gate = gate_actions(
            &item(),
            &user(&[PERMISSION_WISHLIST_REMOVE, PERMISSION_WISHLIST_DELETE]),
            HostContext::Admin,
        );
        assert!(gate.actions.remove);
        assert!(gate.actions.delete);
        assert!(gate.denied.is_empty());
    }

    #[test]
    fn test_admin_without_permissions() {
        let gate = gate_actions(&item(), &user(&[]), HostContext::Admin);
        assert!(!gate.actions.remove);
        assert!(!gate.actions.delete);
        assert!(gate.actions.move_to_cart);
        assert_eq!(
            gate.denied,
            vec![
                (ActionKind::Remove, PERMISSION_WISHLIST_REMOVE),
                (ActionKind::Delete, PERMISSION_WISHLIST_DELETE),
            ]
        );
    }

    #[test]
    fn test_admin_delimited_permissions_do_not_count() {
        let user = User::new(
            "u1",
            RawPermissions::Delimited("WISHLIST_REMOVE,WISHLIST_DELETE".into()),
        );
        let gate = gate_actions(&item(), &user, HostContext::Admin);
        assert!(!gate.actions.remove);
        assert!(!gate.actions.delete);
    }

    #[test]
    fn test_admin_without_id_reports_nothing() {
        let mut item = item();
        item.id = Some(String::new());
        let gate = gate_actions(&item, &user(&[]), HostContext::Admin);
        assert!(!gate.actions.remove);
        assert!(!gate.actions.delete);
        assert!(gate.denied.is_empty());
    }

    #[test]
    fn test_action_names() {
        let name: &str = ActionKind::MoveToCart.as_ref();
        assert_eq!(name, "move_to_cart");
        assert_eq!(ActionKind::Remove.to_string(), "remove");
        assert_eq!(ActionKind::MoveToCart.required_permission(), None);
    }
}

//! Permission resolver
//!
//! Normalizes the current user's permission field and reports users whose
//! field is missing or unusable, once per user key per session.

use std::collections::{BTreeSet, HashSet};

use wishlist_common::{PERMISSION_EDIT, User, resolve_permissions};

use crate::diagnostics::{DiagnosticContext, DiagnosticSink, Level};

/// Message logged for users without usable permissions
pub const MSG_INVALID_PERMISSIONS: &str = "User has missing or invalid permissions";

/// Session-scoped permission resolver
#[derive(Debug, Default)]
pub struct PermissionResolver {
    /// User keys already reported
    diagnosed: HashSet<String>,
}

impl PermissionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized permission set for `user`
    ///
    /// The first time a user key is seen with an absent field, or a present
    /// field that normalizes to nothing, one diagnostic is logged.
    pub fn resolve(&mut self, user: &User, sink: &dyn DiagnosticSink) -> BTreeSet<String> {
        let resolved = resolve_permissions(&user.permissions);
        let unusable = user.permissions.is_absent() || resolved.is_empty();
        if unusable && self.diagnosed.insert(user.diagnostic_key().to_string()) {
            sink.log_message(
                MSG_INVALID_PERMISSIONS,
                Level::Warning,
                &DiagnosticContext::new().with_user(user.diagnostic_key()),
            );
        }
        resolved
    }

    /// Whether `user` holds `EDIT` under any permission shape
    pub fn can_edit(&mut self, user: &User, sink: &dyn DiagnosticSink) -> bool {
        self.resolve(user, sink).contains(PERMISSION_EDIT)
    }

    /// Whether `user`'s permission field is a list containing `permission`.
    ///
    /// Unlike [`Self::can_edit`] this does not accept delimited strings or sets.
    pub fn has_permission(user: &User, permission: &str) -> bool {
        user.permissions.contains_listed(permission)
    }

    /// Number of user keys reported so far
    pub fn diagnosed_count(&self) -> usize {
        self.diagnosed.len()
    }

    /// Forget which users were reported
    pub fn reset(&mut self) {
        self.diagnosed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wishlist_common::RawPermissions;

    #[derive(Default)]
    struct CountingSink {
        users: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for CountingSink {
        fn log_message(&self, _message: &str, _level: Level, context: &DiagnosticContext) {
            self.users
                .lock()
                .unwrap()
                .push(context.user.clone().unwrap_or_default());
        }
    }

    #[test]
    fn test_can_edit_all_shapes() {
        let sink = CountingSink::default();
        let mut resolver = PermissionResolver::new();
        for raw in [
            RawPermissions::list(["EDIT"]),
            RawPermissions::Delimited("X, EDIT".into()),
            RawPermissions::set(["EDIT"]),
        ] {
            assert!(resolver.can_edit(&User::new("u", raw), &sink));
        }
        assert!(!resolver.can_edit(&User::new("u", RawPermissions::list(["Edit"])), &sink));
        assert!(!resolver.can_edit(&User::new("u", RawPermissions::Absent), &sink));
    }

    #[test]
    fn test_has_permission_requires_list() {
        let listed = User::new("u", RawPermissions::list(["WISHLIST_REMOVE"]));
        let delimited = User::new("u", RawPermissions::Delimited("WISHLIST_REMOVE".into()));
        let set = User::new("u", RawPermissions::set(["WISHLIST_REMOVE"]));
        assert!(PermissionResolver::has_permission(&listed, "WISHLIST_REMOVE"));
        assert!(!PermissionResolver::has_permission(&delimited, "WISHLIST_REMOVE"));
        assert!(!PermissionResolver::has_permission(&set, "WISHLIST_REMOVE"));
    }

    #[test]
    fn test_diagnostic_once_per_user() {
        let sink = CountingSink::default();
        let mut resolver = PermissionResolver::new();
        let alice = User::new("alice", RawPermissions::Absent);
        for _ in 0..3 {
            resolver.resolve(&alice, &sink);
        }
        let bob = User::new("bob", RawPermissions::Delimited(" , ".into()));
        resolver.resolve(&bob, &sink);
        resolver.resolve(&bob, &sink);

        assert_eq!(*sink.users.lock().unwrap(), vec!["alice", "bob"]);
        assert_eq!(resolver.diagnosed_count(), 2);
    }

    #[test]
    fn test_no_diagnostic_for_usable_permissions() {
        let sink = CountingSink::default();
        let mut resolver = PermissionResolver::new();
        resolver.resolve(&User::new("u", RawPermissions::list(["EDIT"])), &sink);
        assert!(sink.users.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_list_is_reported() {
        let sink = CountingSink::default();
        let mut resolver = PermissionResolver::new();
        resolver.resolve(&User::new("u", RawPermissions::List(vec![])), &sink);
        resolver.resolve(&User::new("v", RawPermissions::Unrecognized), &sink);
        assert_eq!(sink.users.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_reset() {
        let sink = CountingSink::default();
        let mut resolver = PermissionResolver::new();
        let user = User::default();
        resolver.resolve(&user, &sink);
        resolver.reset();
        resolver.resolve(&user, &sink);
        assert_eq!(*sink.users.lock().unwrap(), vec!["anonymous", "anonymous"]);
    }
}

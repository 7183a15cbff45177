//! Permission shapes and normalization
//!
//! Hosts hand the page a user record whose permission field may be a list of
//! names, a comma-delimited string, or a set-like object. Each shape is a
//! variant of [`RawPermissions`] and is normalized by [`resolve_permissions`].

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

/// Grants the edit affordance (clear-all on the page)
pub const PERMISSION_EDIT: &str = "EDIT";

/// Grants the Delete action in the admin host
pub const PERMISSION_WISHLIST_DELETE: &str = "WISHLIST_DELETE";

/// Grants the Remove action in the admin host
pub const PERMISSION_WISHLIST_REMOVE: &str = "WISHLIST_REMOVE";

/// All permission names the page checks for, in alphabetical order.
///
/// - `EDIT`: clear the whole wishlist
/// - `WISHLIST_DELETE`: delete an entry (admin host only)
/// - `WISHLIST_REMOVE`: remove an entry (checked in the admin host only)
pub const ALL_PERMISSIONS: &[&str] = &[
    PERMISSION_EDIT,
    PERMISSION_WISHLIST_DELETE,
    PERMISSION_WISHLIST_REMOVE,
];

/// Permission field exactly as supplied by the host
///
/// Deserializes from any JSON value and never fails: shapes that are not
/// understood become [`RawPermissions::Unrecognized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum RawPermissions {
    /// Sequence of permission names
    List(Vec<String>),
    /// Comma-delimited string, e.g. `"EDIT, WISHLIST_REMOVE"`
    Delimited(String),
    /// Set-like container
    Set(BTreeSet<String>),
    /// Field missing or null
    #[default]
    Absent,
    /// Any other shape (numbers, booleans, ...)
    Unrecognized,
}

impl RawPermissions {
    /// Build a list variant from anything iterable over string-likes
    pub fn list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(Into::into).collect())
    }

    /// Build a set variant from anything iterable over string-likes
    pub fn set<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(names.into_iter().map(Into::into).collect())
    }

    /// Whether the field was missing or null
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this is a literal sequence that contains `name`.
    ///
    /// Delimited strings and sets never match here, even when
    /// [`resolve_permissions`] would include `name`.
    pub fn contains_listed(&self, name: &str) -> bool {
        match self {
            Self::List(names) => names.iter().any(|n| n == name),
            _ => false,
        }
    }
}

impl From<Value> for RawPermissions {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Delimited(s),
            // Non-string elements are dropped
            Value::Array(values) => Self::List(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            // `{"EDIT": true}` style membership maps
            Value::Object(map) => Self::Set(
                map.into_iter()
                    .filter(|(_, v)| v.as_bool() == Some(true))
                    .map(|(k, _)| k)
                    .collect(),
            ),
            Value::Bool(_) | Value::Number(_) => Self::Unrecognized,
        }
    }
}

/// Normalize a permission field into a canonical set of names
///
/// Never panics. Absent and unrecognized shapes yield an empty set.
/// Delimited strings are split on `,` with surrounding whitespace trimmed
/// and empty segments dropped.
pub fn resolve_permissions(raw: &RawPermissions) -> BTreeSet<String> {
    match raw {
        RawPermissions::List(names) => names.iter().cloned().collect(),
        RawPermissions::Set(names) => names.clone(),
        RawPermissions::Delimited(s) => s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        RawPermissions::Absent | RawPermissions::Unrecognized => BTreeSet::new(),
    }
}

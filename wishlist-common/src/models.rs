//! User, item and host models shared by every surface of the page

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};

use crate::permissions::RawPermissions;

/// Key used for users with neither an id nor an email
pub const ANONYMOUS_USER_KEY: &str = "anonymous";

/// Which shell the page is rendered inside
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HostContext {
    /// Back-office shell; actions are permission-checked
    Admin,
    /// Customer-facing shell
    #[default]
    Storefront,
}

impl HostContext {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The signed-in user as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Role label (informational only, never checked)
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub permissions: RawPermissions,
}

impl User {
    /// Create a user with an id and the given permission field
    pub fn new(id: impl Into<String>, permissions: RawPermissions) -> Self {
        Self {
            id: Some(id.into()),
            permissions,
            ..Default::default()
        }
    }

    /// Key identifying this user in diagnostics: id, else email, else a sentinel
    pub fn diagnostic_key(&self) -> &str {
        self.id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.email.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(ANONYMOUS_USER_KEY)
    }
}

/// A wishlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    pub title: String,

    pub category: String,

    pub price: f64,

    /// Image URL or data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Who added the entry (shown in the admin host only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

impl Item {
    /// Create an item with an id
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            category: category.into(),
            price,
            image: None,
            added_by: None,
        }
    }

    /// Identifier usable for mutating actions; an empty id counts as none
    pub fn actionable_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Accept identifiers sent as JSON strings or numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

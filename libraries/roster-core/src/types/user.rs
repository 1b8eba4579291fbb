/// User domain types
use super::UserId;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, never reassigned
    pub id: UserId,

    /// Display name (trimmed, non-empty)
    pub name: String,

    /// Email address (trimmed, lower-cased, unique within a store)
    pub email: String,

    /// Creation timestamp (ISO-8601 string), immutable after creation
    pub created_at: String,
}

impl User {
    /// Build a record stamped with the current time.
    ///
    /// Does not validate `name` or `email`; stores do that before calling this.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: now_iso8601(),
        }
    }
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name, trimmed on write
    pub name: String,
    /// Email address, trimmed and lower-cased on write
    pub email: String,
}

impl CreateUser {
    /// Create payload from raw, not yet normalized values
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update for an existing user; only present fields are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// Replacement name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUser {
    /// Patch that only replaces the name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Patch that only replaces the email
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// True when the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

//! User entity representing a registered account in the Credence system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// User entity holding the persisted credential record
///
/// Within the sign-in core this entity is read-only: it is created by the
/// registration flow and never mutated or deleted here. The password hash
/// is opaque to the domain and is excluded from serialized and logged
/// representations.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: Uuid,

    /// Unique username; lookups match this field exactly, case-sensitive
    pub username: String,

    /// Opaque password hash, never serialized or logged
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role tag used for authorization scoping
    pub role: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft-delete flag owned by the auditable base record
    pub is_deleted: bool,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, password_hash: String, role: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Compares a supplied role against the stored role, ignoring ASCII case
    ///
    /// `"Admin"` and `"admin"` refer to the same role; the stored value is
    /// preserved as written.
    pub fn role_matches(&self, role: &str) -> bool {
        self.role.eq_ignore_ascii_case(role)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("is_deleted", &self.is_deleted)
            .finish()
    }
}

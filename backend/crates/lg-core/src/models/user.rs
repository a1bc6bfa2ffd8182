//! User entity - a registered account or guest as held by the credential store.

use crate::UserProfile;

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored identity, including its password hash.
///
/// Deliberately not `Serialize`: the only outward representation is
/// [`UserProfile`], obtained through [`User::into_profile`].
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Lower-cased, trimmed; unique across the store
    pub email: String,
    pub password_hash: String,
    pub photo: Option<String>,
    pub is_guest: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Drop the password hash and keep the public fields.
    pub fn into_profile(self) -> UserProfile {
        UserProfile::from(self)
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self.clone())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("photo", &self.photo)
            .field("is_guest", &self.is_guest)
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

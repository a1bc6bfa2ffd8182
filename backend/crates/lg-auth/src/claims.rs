use crate::{AuthError, Result as AuthErrorResult};

use lg_core::{ErrorLocation, User};

use std::panic::Location;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims issued at login.
///
/// Only `sub` is trusted for authorization: gates re-resolve the identity
/// from the store on every request and read the flags from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub is_guest: bool,
    pub is_admin: bool,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, iat: i64, exp: i64) -> Self {
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            is_guest: user.is_guest,
            is_admin: user.is_admin,
            iat,
            exp,
        }
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::TokenMalformed {
            message: format!("sub is not a valid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

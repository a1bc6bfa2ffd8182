//! Capability checks over an already-resolved identity.
//!
//! Transport-agnostic: the HTTP layer resolves the bearer token into an
//! optional [`UserProfile`] and asks [`evaluate`] whether to let it through.

use crate::{AuthError, Result as AuthErrorResult};

use lg_core::UserProfile;

pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
pub const ADMIN_REQUIRED: &str = "Admin access required";
pub const REAL_USER_REQUIRED: &str = "This action is not available for guest users";
pub const GUEST_REQUIRED: &str = "This action is only available for guest users";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any resolved identity.
    Authenticated,
    /// Never denies; anonymous callers pass through.
    OptionalAuthenticated,
    /// Authenticated and not a guest.
    RealUser,
    /// Authenticated guest.
    GuestOnly,
    /// Authenticated admin.
    Admin,
}

/// Allow or deny `identity` for `capability`.
///
/// Role gates presuppose authentication; reaching one without an identity
/// is a composition mistake and is reported as `Forbidden`.
#[track_caller]
pub fn evaluate(identity: Option<&UserProfile>, capability: Capability) -> AuthErrorResult<()> {
    match (capability, identity) {
        (Capability::OptionalAuthenticated, _) => Ok(()),
        (Capability::Authenticated, Some(_)) => Ok(()),
        (Capability::Authenticated, None) => Err(AuthError::unauthorized("Unauthorized")),
        (_, None) => Err(AuthError::forbidden(AUTHENTICATION_REQUIRED)),
        (Capability::RealUser, Some(user)) if user.is_guest => {
            Err(AuthError::forbidden(REAL_USER_REQUIRED))
        }
        (Capability::GuestOnly, Some(user)) if !user.is_guest => {
            Err(AuthError::forbidden(GUEST_REQUIRED))
        }
        (Capability::Admin, Some(user)) if !user.is_admin => {
            Err(AuthError::forbidden(ADMIN_REQUIRED))
        }
        (Capability::RealUser | Capability::GuestOnly | Capability::Admin, Some(_)) => Ok(()),
    }
}

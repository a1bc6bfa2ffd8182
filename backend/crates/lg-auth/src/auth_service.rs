//! Register, login and per-request identity resolution.
//!
//! Stateless between calls; the only shared state is the credential store
//! and the immutable token configuration.

use crate::{AuthError, PasswordHasher, Result as AuthErrorResult, TokenService};

use lg_core::{Credentials, ErrorLocation, NewUser, Registration, UserProfile, normalize_email};
use lg_db::{DbError, UserStore};

use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Hashed once per service and verified against when the email is unknown,
/// so both rejection paths pay one hash.
const DUMMY_PASSWORD: &str = "lingora-unknown-account-placeholder";

/// Successful login: the bearer token plus the public identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: UserProfile,
}

pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
    pub(crate) dummy_digest: OnceCell<String>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            users,
            hasher,
            tokens,
            dummy_digest: OnceCell::new(),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Create an identity with `is_guest` as given. Never grants admin.
    pub async fn register(&self, registration: Registration) -> AuthErrorResult<UserProfile> {
        let is_guest = registration.is_guest;
        let user = create_identity(&*self.users, &self.hasher, registration, is_guest).await?;
        info!("Registered user {} (guest: {})", user.id, user.is_guest);
        Ok(user)
    }

    /// Same as [`register`](Self::register) with `is_guest` forced on.
    pub async fn register_guest(&self, registration: Registration) -> AuthErrorResult<UserProfile> {
        let user = create_identity(&*self.users, &self.hasher, registration, true).await?;
        info!("Registered guest user {}", user.id);
        Ok(user)
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, credentials: Credentials) -> AuthErrorResult<LoginOutcome> {
        let email = normalize_email(&credentials.email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            self.burn_verification(credentials.password).await;
            let err = invalid_credentials();
            warn!("Login rejected [{}]", err.error_code());
            return Err(err);
        };

        if !self
            .hasher
            .verify_blocking(credentials.password, user.password_hash.clone())
            .await
        {
            let err = invalid_credentials();
            warn!("Login rejected for user {} [{}]", user.id, err.error_code());
            return Err(err);
        }

        let access_token = self.tokens.issue(&user)?;
        info!("User {} logged in", user.id);

        Ok(LoginOutcome {
            access_token,
            user: user.into_profile(),
        })
    }

    /// Run one verification against a digest made with this service's own
    /// cost parameters. The outcome is irrelevant.
    async fn burn_verification(&self, password: String) {
        let digest = self
            .dummy_digest
            .get_or_try_init(|| self.hasher.hash_blocking(DUMMY_PASSWORD.to_string()))
            .await;

        match digest {
            Ok(digest) => {
                let _ = self.hasher.verify_blocking(password, digest.clone()).await;
            }
            Err(e) => warn!("Placeholder digest unavailable [{}]", e.error_code()),
        }
    }

    pub async fn validate_by_id(&self, id: Uuid) -> AuthErrorResult<UserProfile> {
        self.users
            .find_by_id(id)
            .await?
            .map(|user| user.into_profile())
            .ok_or_else(|| AuthError::user_not_found(id))
    }

    /// Verify `token` and re-resolve its subject from the store.
    ///
    /// A token whose subject no longer exists is `Unauthorized`, even if it
    /// has not expired.
    pub async fn authenticate(&self, token: &str) -> AuthErrorResult<UserProfile> {
        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        match self.validate_by_id(user_id).await {
            Err(AuthError::UserNotFound { .. }) => Err(AuthError::unauthorized("User not found")),
            other => other,
        }
    }
}

#[track_caller]
fn invalid_credentials() -> AuthError {
    AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub(crate) fn duplicate_email(email: &str) -> AuthError {
    AuthError::DuplicateEmail {
        email: email.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Shared by self-registration and admin user creation.
///
/// The `email_exists` pre-check only gives a friendlier error on the common
/// path; the store's unique constraint decides races.
pub(crate) async fn create_identity(
    users: &dyn UserStore,
    hasher: &PasswordHasher,
    registration: Registration,
    is_guest: bool,
) -> AuthErrorResult<UserProfile> {
    let email = normalize_email(&registration.email);

    if users.email_exists(&email).await? {
        return Err(duplicate_email(&email));
    }

    let password_hash = hasher.hash_blocking(registration.password).await?;

    let new_user = NewUser {
        name: registration.name,
        email: email.clone(),
        password_hash,
        photo: registration.photo,
        is_guest,
        is_admin: false,
    };

    match users.insert(new_user).await {
        Ok(user) => Ok(user.into_profile()),
        Err(DbError::UniqueViolation { .. }) => Err(duplicate_email(&email)),
        Err(e) => Err(e.into()),
    }
}

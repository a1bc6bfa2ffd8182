//! User management behind the admin gate.

use crate::auth_service::{create_identity, duplicate_email};
use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use lg_core::{ProfileUpdate, Registration, UserChanges, UserProfile, normalize_email};
use lg_db::{DbError, UserStore};

use std::sync::Arc;

use log::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    Guest(bool),
    Admin(bool),
}

pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    pub async fn create(&self, registration: Registration) -> AuthErrorResult<UserProfile> {
        let is_guest = registration.is_guest;
        let user = create_identity(&*self.users, &self.hasher, registration, is_guest).await?;
        info!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn list(&self, filter: UserFilter) -> AuthErrorResult<Vec<UserProfile>> {
        let users = match filter {
            UserFilter::All => self.users.find_all().await?,
            UserFilter::Guest(is_guest) => self.users.find_by_guest_status(is_guest).await?,
            UserFilter::Admin(is_admin) => self.users.find_by_admin_status(is_admin).await?,
        };

        Ok(users.into_iter().map(|user| user.into_profile()).collect())
    }

    pub async fn get(&self, id: Uuid) -> AuthErrorResult<UserProfile> {
        self.users
            .find_by_id(id)
            .await?
            .map(|user| user.into_profile())
            .ok_or_else(|| AuthError::user_not_found(id))
    }

    /// Applies a validated partial update; a new password is re-hashed.
    pub async fn update(&self, id: Uuid, update: ProfileUpdate) -> AuthErrorResult<UserProfile> {
        let email = update.email.as_deref().map(normalize_email);

        if let Some(email) = &email
            && let Some(existing) = self.users.find_by_email(email).await?
            && existing.id != id
        {
            return Err(duplicate_email(email));
        }

        let password_hash = match update.password {
            Some(password) => Some(self.hasher.hash_blocking(password).await?),
            None => None,
        };

        let changes = UserChanges {
            name: update.name,
            email: email.clone(),
            password_hash,
            photo: update.photo,
        };

        match self.users.update(id, changes).await {
            Ok(Some(user)) => {
                info!("Updated user {}", user.id);
                Ok(user.into_profile())
            }
            Ok(None) => Err(AuthError::user_not_found(id)),
            Err(DbError::UniqueViolation { .. }) => {
                Err(duplicate_email(email.as_deref().unwrap_or_default()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, id: Uuid) -> AuthErrorResult<()> {
        if !self.users.delete(id).await? {
            return Err(AuthError::user_not_found(id));
        }

        info!("Deleted user {}", id);
        Ok(())
    }

    /// Operator-only path to `is_admin`; registration never sets it.
    pub async fn grant_admin(&self, email: &str) -> AuthErrorResult<UserProfile> {
        let email = normalize_email(email);

        let user = self
            .users
            .set_admin(&email, true)
            .await?
            .ok_or_else(|| AuthError::user_not_found(&email))?;

        info!("Granted admin to user {}", user.id);
        Ok(user.into_profile())
    }
}

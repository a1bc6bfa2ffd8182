//! Operator commands that act on the user store directly.

use crate::error::Result as ServerErrorResult;

use lg_auth::{PasswordHasher, UserService};
use lg_core::UserProfile;
use lg_db::{UserRepository, UserStore};

use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

/// Mark the account registered under `email` as an administrator.
pub async fn grant_admin(pool: SqlitePool, email: &str) -> ServerErrorResult<UserProfile> {
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool));
    let users = UserService::new(store, PasswordHasher::new());

    let user = users.grant_admin(email).await?;
    info!("User {} <{}> is now an admin", user.id, user.email);

    Ok(user)
}

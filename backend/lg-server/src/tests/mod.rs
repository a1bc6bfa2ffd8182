mod api;

use crate::AppState;

use lg_auth::{PasswordHasher, TokenConfig, TokenService};
use lg_core::{Credentials, Registration, UserProfile};
use lg_db::{UserRepository, UserStore};

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const SECRET: &str = "unit-test-secret-unit-test-secret-0123";
pub(crate) const PASSWORD: &str = "password123";

pub(crate) async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");
    lg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let params = argon2::Params::new(8, 1, 1, None).expect("valid argon2 params");
    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool));

    AppState::new(
        store,
        PasswordHasher::with_params(params),
        TokenService::new(TokenConfig::new(SECRET, Duration::from_secs(3600))),
    )
}

/// Register `email` and return the profile plus a bearer token for it.
pub(crate) async fn signed_in(
    state: &AppState,
    email: &str,
    is_guest: bool,
) -> (UserProfile, String) {
    let registration = Registration {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        photo: None,
        is_guest,
    };
    state
        .auth
        .register(registration)
        .await
        .expect("registration should succeed");

    let outcome = state
        .auth
        .login(Credentials {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .expect("login should succeed");

    (outcome.user, outcome.access_token)
}

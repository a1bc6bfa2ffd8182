#![allow(dead_code)]

use lg_core::NewUser;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    lg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        photo: None,
        is_guest: false,
        is_admin: false,
    }
}

pub fn new_guest(name: &str, email: &str) -> NewUser {
    NewUser {
        is_guest: true,
        ..new_user(name, email)
    }
}

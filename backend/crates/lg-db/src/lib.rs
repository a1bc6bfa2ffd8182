pub mod connection;
pub mod error;
pub mod repositories;
pub mod user_store;

pub use connection::pool::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use user_store::UserStore;

use sqlx::migrate::Migrator;

/// Embedded schema migrations for the credential store.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

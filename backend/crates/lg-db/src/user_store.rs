//! Credential store contract.
//!
//! The auth layer only ever talks to this trait, so it can run against the
//! SQLite repository in production and an in-memory fake in tests.

use crate::Result as DbErrorResult;

use lg_core::{NewUser, User, UserChanges};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> DbErrorResult<bool>;

    /// Assigns the id and both timestamps. A taken email fails with
    /// [`DbError::UniqueViolation`](crate::DbError::UniqueViolation).
    async fn insert(&self, user: NewUser) -> DbErrorResult<User>;

    /// Newest first.
    async fn find_all(&self) -> DbErrorResult<Vec<User>>;

    async fn find_by_admin_status(&self, is_admin: bool) -> DbErrorResult<Vec<User>>;

    async fn find_by_guest_status(&self, is_guest: bool) -> DbErrorResult<Vec<User>>;

    /// Applies the set fields and bumps `updated_at`. `None` when the id is unknown.
    async fn update(&self, id: Uuid, changes: UserChanges) -> DbErrorResult<Option<User>>;

    /// `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> DbErrorResult<bool>;

    async fn set_admin(&self, email: &str, is_admin: bool) -> DbErrorResult<Option<User>>;
}

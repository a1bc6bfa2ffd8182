//! SQLite-backed [`UserStore`].
//!
//! Timestamps are stored as unix seconds; the returned [`User`] is built from
//! the same truncated values so an insert and a subsequent read agree.

use crate::{DbError, Result as DbErrorResult, UserStore};

use lg_core::{NewUser, User, UserChanges};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, photo, is_guest, is_admin, created_at, updated_at";

#[derive(FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    photo: Option<String>,
    is_guest: bool,
    is_admin: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: Uuid::parse_str(&row.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            photo: row.photo,
            is_guest: row.is_guest,
            is_admin: row.is_admin,
            created_at: timestamp(row.created_at, "users.created_at")?,
            updated_at: timestamp(row.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Current time truncated to whole seconds.
fn now() -> DateTime<Utc> {
    let secs = Utc::now().timestamp();
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn into_users(rows: Vec<UserRow>) -> DbErrorResult<Vec<User>> {
    rows.into_iter().map(User::try_from).collect()
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, value: bool) -> DbErrorResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE {} = ? ORDER BY created_at DESC, id",
            USER_COLUMNS, clause
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        into_users(rows)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn email_exists(&self, email: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn insert(&self, user: NewUser) -> DbErrorResult<User> {
        let now = now();
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            photo: user.photo,
            is_guest: user.is_guest,
            is_admin: user.is_admin,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, password_hash, photo,
                    is_guest, is_admin, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.photo)
        .bind(user.is_guest)
        .bind(user.is_admin)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY created_at DESC, id",
            USER_COLUMNS
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        into_users(rows)
    }

    async fn find_by_admin_status(&self, is_admin: bool) -> DbErrorResult<Vec<User>> {
        self.fetch_where("is_admin", is_admin).await
    }

    async fn find_by_guest_status(&self, is_guest: bool) -> DbErrorResult<Vec<User>> {
        self.fetch_where("is_guest", is_guest).await
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> DbErrorResult<Option<User>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        // COALESCE keeps the stored value for every field left as None
        let result = sqlx::query(
            r#"
                UPDATE users SET
                    name = COALESCE(?, name),
                    email = COALESCE(?, email),
                    password_hash = COALESCE(?, password_hash),
                    photo = COALESCE(?, photo),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.photo)
        .bind(now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_admin(&self, email: &str, is_admin: bool) -> DbErrorResult<Option<User>> {
        let result = sqlx::query("UPDATE users SET is_admin = ?, updated_at = ? WHERE email = ?")
            .bind(is_admin)
            .bind(now().timestamp())
            .bind(email)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_email(email).await
    }
}

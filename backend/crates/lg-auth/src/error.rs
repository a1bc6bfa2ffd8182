use lg_core::ErrorLocation;
use lg_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User with email {email} already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// `key` is the id (or, for admin grants, the email) that was looked up.
    #[error("User not found: {key} {location}")]
    UserNotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    TokenMalformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid token signature {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code, used in logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::TokenMalformed { .. } => "TOKEN_MALFORMED",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::TokenEncode { .. } => "JWT_ENCODE_FAILED",
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    /// True for every failure that means "no usable credential was presented".
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            Self::TokenMalformed { .. }
                | Self::TokenExpired { .. }
                | Self::InvalidSignature { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
        )
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found(key: impl ToString) -> Self {
        Self::UserNotFound {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

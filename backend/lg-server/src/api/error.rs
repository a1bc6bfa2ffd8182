//! REST API error types
//!
//! Every failure leaving the HTTP layer passes through [`ApiError`] and is
//! rendered as an [`ErrorEnvelope`].

use crate::api::envelope::{ErrorEnvelope, ErrorMessage};

use lg_auth::AuthError;
use lg_core::{CoreError, FieldErrors};
use lg_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const INVALID_USER_ID: &str = "Invalid user ID format";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failure (400)
    #[error("Validation failed: {fields} {location}")]
    Validation {
        fields: FieldErrors,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or unusable credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); `message` is logged, never sent
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope body for this error.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let message = match self {
            Self::Validation { fields, .. } => ErrorMessage::Fields(fields.clone().into_inner()),
            Self::Internal { .. } => ErrorMessage::List(vec![INTERNAL_SERVER_ERROR.to_string()]),
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. } => ErrorMessage::List(vec![message.clone()]),
        };

        ErrorEnvelope::new(self.status(), message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        (status, Json(self.to_envelope())).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let detail = err.to_string();

        match err {
            AuthError::DuplicateEmail { email, .. } => ApiError::Conflict {
                message: format!("User with email {} already exists", email),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid email or password".to_string(),
                location,
            },
            AuthError::UserNotFound { key, .. } => ApiError::NotFound {
                message: format!("User with ID {} not found", key),
                location,
            },
            AuthError::Unauthorized { message, .. } => ApiError::Unauthorized { message, location },
            AuthError::Forbidden { message, .. } => ApiError::Forbidden { message, location },
            AuthError::TokenMalformed { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::InvalidSignature { .. }
            | AuthError::MissingHeader { .. }
            | AuthError::InvalidScheme { .. } => ApiError::Unauthorized {
                message: "Unauthorized".to_string(),
                location,
            },
            AuthError::PasswordHash { .. }
            | AuthError::TokenEncode { .. }
            | AuthError::Store { .. } => ApiError::Internal {
                message: detail,
                location,
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match err {
            CoreError::ValidationFailed { fields, .. } => ApiError::Validation { fields, location },
            CoreError::InvalidEmail { .. } => {
                let mut fields = FieldErrors::new();
                fields.add("email", "Email must be a valid email address");
                ApiError::Validation { fields, location }
            }
        }
    }
}

/// Store failures never reach clients in detail
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        ApiError::Internal {
            message: format!("Database error: {}", err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(err: uuid::Error) -> Self {
        log::debug!("Rejected path id: {}", err);
        ApiError::BadRequest {
            message: INVALID_USER_ID.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

//! Axum extractors for bearer-token authentication
//!
//! Each extractor resolves `Authorization: Bearer <token>` into a
//! [`UserProfile`] and then applies one [`Capability`] gate.

use crate::{ApiError, AppState};

use lg_auth::{AuthError, Capability, evaluate, extract_bearer_token};
use lg_core::UserProfile;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Any authenticated identity
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserProfile);

/// Identity when a valid token is present, `None` otherwise
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<UserProfile>);

/// Authenticated non-guest
#[derive(Debug, Clone)]
pub struct RealUser(pub UserProfile);

/// Authenticated guest
#[derive(Debug, Clone)]
pub struct GuestUser(pub UserProfile);

/// Authenticated admin
#[derive(Debug, Clone)]
pub struct AdminUser(pub UserProfile);

async fn resolve_identity(parts: &Parts, state: &AppState) -> Result<UserProfile, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_bearer_token(header)?;
    state.auth.authenticate(token).await
}

async fn authorize(
    parts: &Parts,
    state: &AppState,
    capability: Capability,
) -> Result<UserProfile, ApiError> {
    let user = resolve_identity(parts, state).await.map_err(|e| {
        if e.is_token_failure() {
            log::warn!(
                "Rejected credentials for {} {}: {}",
                parts.method,
                parts.uri.path(),
                e.error_code()
            );
        }
        ApiError::from(e)
    })?;

    evaluate(Some(&user), capability).map_err(|e| {
        log::debug!("User {} denied {:?}", user.id, capability);
        ApiError::from(e)
    })?;

    Ok(user)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            authorize(parts, state, Capability::Authenticated)
                .await
                .map(CurrentUser)
        }
    }
}

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match resolve_identity(parts, state).await {
                Ok(user) => Ok(OptionalUser(Some(user))),
                Err(e @ (AuthError::Store { .. } | AuthError::PasswordHash { .. })) => {
                    Err(ApiError::from(e))
                }
                Err(e) => {
                    log::debug!("Anonymous request: {}", e.error_code());
                    Ok(OptionalUser(None))
                }
            }
        }
    }
}

impl FromRequestParts<AppState> for RealUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            authorize(parts, state, Capability::RealUser)
                .await
                .map(RealUser)
        }
    }
}

impl FromRequestParts<AppState> for GuestUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            authorize(parts, state, Capability::GuestOnly)
                .await
                .map(GuestUser)
        }
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { authorize(parts, state, Capability::Admin).await.map(AdminUser) }
    }
}

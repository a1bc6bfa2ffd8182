//! Registration, login and profile handlers

use crate::{ApiJson, ApiResponse, ApiResult, AppState, CurrentUser};

use lg_auth::LoginOutcome;
use lg_core::{LoginPayload, RegisterPayload, UserProfile};

use axum::extract::State;

/// POST /api/v1/auth/register
///
/// `isGuest` in the body is honoured; admin status never is.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> ApiResult<ApiResponse<UserProfile>> {
    let registration = payload.validate()?;
    let user = state.auth.register(registration).await?;

    Ok(ApiResponse::created(user, "User registered successfully"))
}

/// POST /api/v1/auth/register/guest
pub async fn register_guest(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> ApiResult<ApiResponse<UserProfile>> {
    let registration = payload.validate()?;
    let user = state.auth.register_guest(registration).await?;

    Ok(ApiResponse::created(
        user,
        "Guest user registered successfully",
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> ApiResult<ApiResponse<LoginOutcome>> {
    let credentials = payload.validate()?;
    let outcome = state.auth.login(credentials).await?;

    Ok(ApiResponse::ok(outcome, "Login successful"))
}

/// GET /api/v1/auth/profile
pub async fn profile(CurrentUser(user): CurrentUser) -> ApiResponse<UserProfile> {
    ApiResponse::ok(user, "Profile retrieved successfully")
}

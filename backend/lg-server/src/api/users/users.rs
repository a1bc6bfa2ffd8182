//! User management handlers
//!
//! Everything except `/users/profile/me` sits behind the admin gate.

use crate::{
    AdminUser, ApiJson, ApiQuery, ApiResponse, ApiResult, AppState, CurrentUser, ListUsersQuery,
};

use lg_core::{RegisterPayload, UpdateUserPayload, UserProfile};

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> ApiResult<ApiResponse<UserProfile>> {
    let registration = payload.validate()?;
    let user = state.users.create(registration).await?;
    log::info!("Admin {} created user {}", admin.id, user.id);

    Ok(ApiResponse::created(user, "User created successfully"))
}

/// GET /api/v1/users?isGuest=..&isAdmin=..
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    ApiQuery(query): ApiQuery<ListUsersQuery>,
) -> ApiResult<ApiResponse<Vec<UserProfile>>> {
    let filter = query.into_filter()?;
    let users = state.users.list(filter).await?;

    Ok(ApiResponse::ok(users, "Users retrieved successfully"))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<UserProfile>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = state.users.get(user_id).await?;

    Ok(ApiResponse::ok(user, "User retrieved successfully"))
}

/// PATCH /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserPayload>,
) -> ApiResult<ApiResponse<UserProfile>> {
    let user_id = Uuid::parse_str(&id)?;
    let update = payload.validate()?;
    let user = state.users.update(user_id, update).await?;
    log::info!("Admin {} updated user {}", admin.id, user.id);

    Ok(ApiResponse::ok(user, "User updated successfully"))
}

/// DELETE /api/v1/users/{id}
///
/// 204 with an empty body.
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = Uuid::parse_str(&id)?;
    state.users.delete(user_id).await?;
    log::info!("Admin {} deleted user {}", admin.id, user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/profile/me
pub async fn my_profile(CurrentUser(user): CurrentUser) -> ApiResponse<UserProfile> {
    ApiResponse::ok(user, "Profile retrieved successfully")
}

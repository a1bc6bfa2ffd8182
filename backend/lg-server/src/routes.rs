use crate::{ApiError, AppState, health};
use crate::{
    create_user, delete_user, get_user, list_users, login, my_profile, profile, register,
    register_guest, update_user,
};

use axum::{
    Router,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/v1/health", get(health::health))
        // Auth
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/register/guest", post(register_guest))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/profile", get(profile))
        // Users
        .route("/api/v1/users", get(list_users).post(create_user))
        .route("/api/v1/users/profile/me", get(my_profile))
        .route(
            "/api/v1/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .fallback(not_found)
        // Wrong verb on a known path is reported like an unknown route
        .method_not_allowed_fallback(not_found)
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn not_found(method: Method, uri: Uri) -> Response {
    ApiError::not_found(format!("Cannot {} {}", method, uri.path())).into_response()
}

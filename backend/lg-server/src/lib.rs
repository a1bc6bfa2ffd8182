pub mod admin;
pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod secret;

#[cfg(test)]
mod tests;

pub use api::{
    auth::auth::{login, profile, register, register_guest},
    envelope::{ApiResponse, ErrorEnvelope, ErrorMessage, SuccessEnvelope},
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        api_json::ApiJson,
        api_query::ApiQuery,
        auth_user::{AdminUser, CurrentUser, GuestUser, OptionalUser, RealUser},
    },
    users::{
        list_users_query::ListUsersQuery,
        users::{create_user, delete_user, get_user, list_users, my_profile, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;

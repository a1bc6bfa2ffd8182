pub mod api_json;
pub mod api_query;
pub mod auth_user;

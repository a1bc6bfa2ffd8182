pub mod list_users_query;
#[allow(clippy::module_inception)]
pub mod users;

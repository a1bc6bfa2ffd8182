mod envelope;
mod error;
mod extractors;
mod list_users_query;

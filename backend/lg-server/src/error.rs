use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] lg_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] lg_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] lg_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to write {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Secret generation failed: {message}")]
    Secret { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

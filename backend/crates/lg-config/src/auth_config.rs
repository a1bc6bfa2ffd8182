use crate::{ConfigError, ConfigErrorResult, DEFAULT_JWT_EXPIRES_IN, MIN_JWT_SECRET_LENGTH};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; never logged.
    pub jwt_secret: Option<String>,
    /// Token lifetime as a humantime duration ("7d", "12h", "90m")
    pub jwt_expires_in: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_expires_in: String::from(DEFAULT_JWT_EXPIRES_IN),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expires_in", &self.jwt_expires_in)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.secret()?;
        self.token_ttl()?;
        Ok(())
    }

    /// The signing secret, checked for presence and minimum length.
    pub fn secret(&self) -> ConfigErrorResult<&str> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth(
                "auth.jwt_secret is required (set LINGORA_AUTH_JWT_SECRET or run `lg-server generate-secret`)",
            )
        })?;

        if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(secret)
    }

    pub fn token_ttl(&self) -> ConfigErrorResult<Duration> {
        let ttl = humantime::parse_duration(self.jwt_expires_in.trim()).map_err(|e| {
            ConfigError::auth(format!(
                "auth.jwt_expires_in '{}' is not a valid duration: {}",
                self.jwt_expires_in, e
            ))
        })?;

        if ttl.is_zero() {
            return Err(ConfigError::auth("auth.jwt_expires_in must be positive"));
        }

        Ok(ttl)
    }
}

//! HS256 token issue and verification.
//!
//! Expiry is checked here rather than by `jsonwebtoken` so that a bad
//! signature is always reported as such, and so tests can pass an explicit
//! clock through [`TokenService::issue_at`] / [`TokenService::verify_at`].

use crate::{AuthError, Claims, Result as AuthErrorResult};

use lg_core::{ErrorLocation, User};

use std::fmt;
use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Immutable signing configuration, built once at startup.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    ttl: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_secs: i64::try_from(config.ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Token lifetime in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        self.issue_at(user, Utc::now().timestamp())
    }

    #[track_caller]
    pub fn issue_at(&self, user: &User, now: i64) -> AuthErrorResult<String> {
        let claims = Claims::for_user(user, now, now.saturating_add(self.ttl_secs));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Signature first, then expiry (`now > exp`, no leeway).
    #[track_caller]
    pub fn verify_at(&self, token: &str, now: i64) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::TokenMalformed {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        if now > claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}

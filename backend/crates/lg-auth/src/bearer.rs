use crate::{AuthError, Result as AuthErrorResult};

use lg_core::ErrorLocation;

use std::panic::Location;

const BEARER_SCHEME: &str = "Bearer";

/// Pull the token out of an `Authorization` header value. The scheme name
/// is case-insensitive.
#[track_caller]
pub fn extract_bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = match header.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        _ => {
            return Err(AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    if token.is_empty() {
        return Err(AuthError::TokenMalformed {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}

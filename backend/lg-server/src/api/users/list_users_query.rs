use crate::ApiError;

use lg_auth::UserFilter;
use lg_core::FieldErrors;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Query parameters for listing users
///
/// Values arrive as strings so a bad flag is reported against its own
/// field instead of as a flat query error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub is_guest: Option<String>,
    pub is_admin: Option<String>,
}

impl ListUsersQuery {
    /// `isGuest` wins when both flags are given.
    #[track_caller]
    pub fn into_filter(self) -> Result<UserFilter, ApiError> {
        let mut fields = FieldErrors::new();
        let is_guest = parse_flag(&mut fields, "isGuest", self.is_guest.as_deref());
        let is_admin = parse_flag(&mut fields, "isAdmin", self.is_admin.as_deref());

        if !fields.is_empty() {
            return Err(ApiError::Validation {
                fields,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(match (is_guest, is_admin) {
            (Some(flag), _) => UserFilter::Guest(flag),
            (None, Some(flag)) => UserFilter::Admin(flag),
            (None, None) => UserFilter::All,
        })
    }
}

fn parse_flag(fields: &mut FieldErrors, name: &str, raw: Option<&str>) -> Option<bool> {
    match raw? {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            fields.add(name, format!("{} must be true or false", name));
            None
        }
    }
}

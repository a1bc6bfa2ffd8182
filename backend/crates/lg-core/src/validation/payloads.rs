//! Inbound request payloads and their validated forms.
//!
//! Payload fields are all optional at the serde level so that a missing
//! field is reported as "X is required" alongside every other field
//! failure, rather than aborting deserialization on the first one.

use crate::{FieldErrors, MIN_PASSWORD_LENGTH, Result as CoreResult, is_valid_email, normalize_email};

use std::fmt;

use serde::Deserialize;

const NAME_REQUIRED: &str = "Name is required";
const NAME_EMPTY: &str = "Name cannot be empty";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Email must be a valid email address";
const PASSWORD_REQUIRED: &str = "Password is required";

fn password_too_short() -> String {
    format!(
        "Password must be at least {} characters long",
        MIN_PASSWORD_LENGTH
    )
}

// =============================================================================
// Registration
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
    pub is_guest: Option<bool>,
}

/// A registration that passed validation; email already normalized.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
    pub is_guest: bool,
}

impl RegisterPayload {
    #[track_caller]
    pub fn validate(self) -> CoreResult<Registration> {
        let mut errors = FieldErrors::new();

        let name = required_name(&mut errors, self.name);
        let email = required_email(&mut errors, self.email);
        let password = new_password(&mut errors, self.password);

        errors.into_result()?;

        Ok(Registration {
            name,
            email,
            password,
            photo: self.photo,
            is_guest: self.is_guest.unwrap_or(false),
        })
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("photo", &self.photo)
            .field("is_guest", &self.is_guest)
            .finish()
    }
}

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginPayload {
    #[track_caller]
    pub fn validate(self) -> CoreResult<Credentials> {
        let mut errors = FieldErrors::new();

        let email = required_email(&mut errors, self.email);
        let password = match self.password {
            Some(password) if !password.is_empty() => password,
            _ => {
                errors.add("password", PASSWORD_REQUIRED);
                String::new()
            }
        };

        errors.into_result()?;

        Ok(Credentials { email, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Profile update
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
}

/// Validated partial update. The password is still plaintext here;
/// hashing happens in the auth layer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub photo: Option<String>,
}

impl UpdateUserPayload {
    #[track_caller]
    pub fn validate(self) -> CoreResult<ProfileUpdate> {
        let mut errors = FieldErrors::new();

        let name = self.name.map(|name| {
            let name = name.trim().to_string();
            if name.is_empty() {
                errors.add("name", NAME_EMPTY);
            }
            name
        });

        let email = self.email.map(|email| {
            let email = normalize_email(&email);
            if !is_valid_email(&email) {
                errors.add("email", EMAIL_INVALID);
            }
            email
        });

        let password = self.password.map(|password| {
            if password.chars().count() < MIN_PASSWORD_LENGTH {
                errors.add("password", password_too_short());
            }
            password
        });

        errors.into_result()?;

        Ok(ProfileUpdate {
            name,
            email,
            password,
            photo: self.photo,
        })
    }
}

impl fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("photo", &self.photo)
            .finish()
    }
}

// =============================================================================
// Field rules
// =============================================================================

fn required_name(errors: &mut FieldErrors, value: Option<String>) -> String {
    let name = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        errors.add("name", NAME_REQUIRED);
    }
    name
}

fn required_email(errors: &mut FieldErrors, value: Option<String>) -> String {
    let Some(raw) = value else {
        errors.add("email", EMAIL_REQUIRED);
        return String::new();
    };

    let email = normalize_email(&raw);
    if email.is_empty() {
        errors.add("email", EMAIL_REQUIRED);
    }
    if !is_valid_email(&email) {
        errors.add("email", EMAIL_INVALID);
    }
    email
}

fn new_password(errors: &mut FieldErrors, value: Option<String>) -> String {
    let Some(password) = value else {
        errors.add("password", PASSWORD_REQUIRED);
        return String::new();
    };

    if password.is_empty() {
        errors.add("password", PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add("password", password_too_short());
    }
    password
}

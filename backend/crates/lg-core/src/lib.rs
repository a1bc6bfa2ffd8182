pub mod email;
pub mod error;
pub mod models;
pub mod validation;

pub use email::{is_valid_email, normalize_email};
pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_changes::UserChanges;
pub use models::user_profile::UserProfile;
pub use validation::field_errors::FieldErrors;
pub use validation::payloads::{
    Credentials, LoginPayload, ProfileUpdate, RegisterPayload, Registration, UpdateUserPayload,
};

pub use error_location::ErrorLocation;

/// Minimum accepted plaintext password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

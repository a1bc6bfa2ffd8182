use crate::{ErrorLocation, FieldErrors};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {fields} {location}")]
    ValidationFailed {
        fields: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Invalid email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

pub mod field_errors;
pub mod payloads;

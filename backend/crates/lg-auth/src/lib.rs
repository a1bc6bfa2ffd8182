pub mod access_gate;
pub mod auth_service;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod password;
pub mod token_service;
pub mod user_service;

pub use access_gate::{Capability, evaluate};
pub use auth_service::{AuthService, LoginOutcome};
pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use token_service::{TokenConfig, TokenService};
pub use user_service::{UserFilter, UserService};

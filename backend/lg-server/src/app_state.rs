use lg_auth::{AuthService, PasswordHasher, TokenService, UserService};
use lg_db::UserStore;

use std::sync::Arc;
use std::time::Instant;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            auth: Arc::new(AuthService::new(store.clone(), hasher.clone(), tokens)),
            users: Arc::new(UserService::new(store, hasher)),
            started_at: Instant::now(),
        }
    }
}

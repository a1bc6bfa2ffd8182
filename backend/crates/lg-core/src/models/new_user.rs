/// Insert request for the credential store. The store assigns `id`,
/// `created_at` and `updated_at`.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub photo: Option<String>,
    pub is_guest: bool,
    pub is_admin: bool,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("photo", &self.photo)
            .field("is_guest", &self.is_guest)
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

use log::info;

use crate::domain::error::DomainError;
use crate::domain::models::{Role, User};

/// The single "logged-in" user of the desktop app, if any.
///
/// There is no password; the role is whatever the user picked.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session. A failed login leaves the old one in place.
    pub fn login(&mut self, username: &str, role: Role) -> Result<&User, DomainError> {
        let user = User::new(username, role)?;
        info!("Logged in as {} ({})", user.username(), user.role());
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.username());
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::models::check_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Child,
    Parent,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Child, Role::Parent, Role::Teacher];

    /// Name used in the role picker and in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Child => "CHILD",
            Role::Parent => "PARENT",
            Role::Teacher => "TEACHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session token: who is at the keyboard and what they claim to be.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    role: Role,
}

impl User {
    pub fn new(username: &str, role: Role) -> Result<Self, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::invalid("username", "cannot be empty"));
        }
        check_text("username", username)?;
        Ok(Self {
            username: username.to_string(),
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

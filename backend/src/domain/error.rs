//! Error taxonomy shared by every domain operation.
//!
//! All variants except `PersistenceWarning` mean the requested change was
//! not applied. `PersistenceWarning` is only ever reported next to a change
//! that already happened in memory.

use crate::domain::models::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Login first")]
    NotLoggedIn,
    #[error("This action is only for: {}", join_roles(.0))]
    RoleForbidden(&'static [Role]),
    #[error("You can only act on your own tasks (task {0})")]
    NotOwner(String),
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Task {0} must be completed before approval")]
    NotCompleted(String),
    #[error("Task {0} has already been rated")]
    AlreadyRated(String),
    #[error("Wish {0} has already been purchased")]
    AlreadyPurchased(String),
    #[error("No task or wish with id {0}")]
    NotFound(String),
    #[error("Id {0} is already in use")]
    DuplicateId(String),
    #[error("Change applied but could not be saved: {0}")]
    PersistenceWarning(String),
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Stable identifier used by presentation layers
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotLoggedIn => "NOT_LOGGED_IN",
            DomainError::RoleForbidden(_) => "ROLE_FORBIDDEN",
            DomainError::NotOwner(_) => "NOT_OWNER",
            DomainError::InvalidInput { .. } => "INVALID_INPUT",
            DomainError::NotCompleted(_) => "NOT_COMPLETED",
            DomainError::AlreadyRated(_) => "ALREADY_RATED",
            DomainError::AlreadyPurchased(_) => "ALREADY_PURCHASED",
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::DuplicateId(_) => "DUPLICATE_ID",
            DomainError::PersistenceWarning(_) => "PERSISTENCE_WARNING",
        }
    }
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Authorization gate.
//!
//! Pure role table over the current session. Entity state (completed,
//! rating range, ...) is checked afterwards by the services.

use crate::domain::error::DomainError;
use crate::domain::models::{Role, Task, User};
use crate::domain::session::Session;

/// Everything a session can ask the core to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddTask,
    CompleteTask,
    ApproveTask,
    AddWish,
    ApproveWish,
    ViewTasks,
    ViewWishes,
}

impl Action {
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Action::AddTask | Action::ApproveTask => &[Role::Parent, Role::Teacher],
            Action::CompleteTask | Action::AddWish => &[Role::Child],
            Action::ApproveWish => &[Role::Parent],
            Action::ViewTasks | Action::ViewWishes => &Role::ALL,
        }
    }
}

/// Check login and role for `action`, returning the acting user
pub fn authorize(session: &Session, action: Action) -> Result<&User, DomainError> {
    let user = session.current_user().ok_or(DomainError::NotLoggedIn)?;
    let allowed = action.allowed_roles();
    if !allowed.contains(&user.role()) {
        return Err(DomainError::RoleForbidden(allowed));
    }
    Ok(user)
}

/// Children may only complete their own tasks
pub fn authorize_task_owner(user: &User, task: &Task) -> Result<(), DomainError> {
    if user.role() == Role::Child && !task.is_owned_by(user.username()) {
        return Err(DomainError::NotOwner(task.id().to_string()));
    }
    Ok(())
}

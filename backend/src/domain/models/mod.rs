pub mod score;
pub mod task;
pub mod user;
pub mod wish;

pub use score::{ChildScore, PROGRESS_MAX};
pub use task::{parse_due_date, Rating, Task, TaskState};
pub use user::{Role, User};
pub use wish::{Wish, WishState};

use crate::domain::error::DomainError;

/// Stored text may hold `\n` (it is escaped on disk) but never a carriage
/// return, which the data files would read back as a line break.
pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.contains('\r') {
        return Err(DomainError::invalid(field, "cannot contain a carriage return"));
    }
    Ok(())
}

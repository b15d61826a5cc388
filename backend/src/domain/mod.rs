//! # Domain Module
//!
//! Business rules of the chore tracker, independent of storage and UI.
//!
//! ## Module Organization
//!
//! - **models**: tasks, wishes, users and the derived child score
//! - **scoring**: approved ratings → points → level
//! - **authorization**: which role may do what
//! - **session**: the self-declared logged-in user
//! - **task_service / wish_service**: the role-gated state machines
//! - **commands**: one input struct per operation
//!
//! ## Business Rules
//!
//! - Parents and teachers assign and rate tasks; a child completes their own
//! - Only rated tasks score; points are recomputed from the full task list
//! - Children add wishes for themselves; only parents approve them
//! - A rejected operation never leaves a partial change behind

pub mod authorization;
pub mod commands;
pub mod error;
pub mod models;
pub mod scoring;
pub mod session;
pub mod task_service;
pub mod wish_service;

pub use authorization::{authorize, Action};
pub use error::DomainError;
pub use session::Session;
pub use task_service::TaskService;
pub use wish_service::WishService;

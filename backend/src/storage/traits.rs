//! # Storage Traits
//!
//! Seams between the in-memory entity store and whatever keeps the data
//! between runs. Every call rewrites or reads a whole collection; the data
//! set is small enough that incremental updates are not worth having.

use anyhow::Result;

use crate::domain::models::{Task, Wish};

/// Whole-file task persistence
pub trait TaskStorage: Send + Sync {
    /// Load every task, in file order. A missing backing file is an empty list.
    fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Replace the stored tasks with `tasks`
    fn save_tasks(&self, tasks: &[Task]) -> Result<()>;
}

/// Whole-file wish persistence
pub trait WishStorage: Send + Sync {
    fn load_wishes(&self) -> Result<Vec<Wish>>;

    fn save_wishes(&self, wishes: &[Wish]) -> Result<()>;
}

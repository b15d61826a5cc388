//! # Flat-File Storage Module
//!
//! Plain-text storage for tasks and wishes: two files, one record per line,
//! fields separated by `|`. Both files are rewritten in full on every save.
//!
//! ## File Structure
//!
//! ```text
//! {data_directory}/
//! ├── Tasks.txt     ← task_repository
//! └── Wishes.txt    ← wish_repository
//! kidtask.yaml      ← config_repository (working directory, optional)
//! ```
//!
//! ## Features
//!
//! - Field escaping so text can hold `|`, `\` and line breaks
//! - Atomic file writes with temp files
//! - Lenient loading: unreadable records are logged and skipped

pub mod codec;
pub mod config_repository;
pub mod connection;
pub mod task_repository;
pub mod wish_repository;

#[cfg(test)]
pub mod test_utils;

pub use config_repository::{AppConfig, ConfigRepository};
pub use connection::FlatFileConnection;
pub use task_repository::TaskRepository;
pub use wish_repository::WishRepository;

//! # Storage Module
//!
//! - **entity_store**: the in-memory task and wish lists the services mutate
//! - **traits**: `TaskStorage` / `WishStorage`, the persistence seams
//! - **flat_file**: pipe-delimited text files plus the YAML app config

pub mod entity_store;
pub mod flat_file;
pub mod traits;

pub use entity_store::EntityStore;
pub use flat_file::{AppConfig, ConfigRepository, FlatFileConnection, TaskRepository, WishRepository};
pub use traits::{TaskStorage, WishStorage};

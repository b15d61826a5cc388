//! Conversions between domain types and the `shared` DTOs.

pub mod session_mapper;
pub mod task_mapper;
pub mod wish_mapper;

pub use session_mapper::SessionMapper;
pub use task_mapper::TaskMapper;
pub use wish_mapper::WishMapper;

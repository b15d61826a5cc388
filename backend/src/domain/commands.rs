//! Domain-level command types.
//!
//! One input struct per operation. Presentation layers map their own DTOs
//! (see the `shared` crate) onto these; the services do all validation.

pub mod session {
    use crate::domain::models::Role;

    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub role: Role,
    }
}

pub mod task {
    /// Input for assigning a new task to a child.
    #[derive(Debug, Clone)]
    pub struct AddTaskCommand {
        pub child_username: String,
        pub title: String,
        pub description: String,
        /// YYYY-MM-DD
        pub due_date: String,
        pub base_points: i64,
    }

    #[derive(Debug, Clone)]
    pub struct CompleteTaskCommand {
        pub task_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct ApproveTaskCommand {
        pub task_id: String,
        /// Must be within 1..=5
        pub rating: i64,
    }
}

pub mod wish {
    /// Input for a child adding a wish. The owner is always the session user.
    #[derive(Debug, Clone)]
    pub struct AddWishCommand {
        pub description: String,
        pub required_level: i64,
    }

    #[derive(Debug, Clone)]
    pub struct ApproveWishCommand {
        pub wish_id: String,
    }
}

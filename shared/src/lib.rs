use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-declared role chosen at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Child,
    Parent,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Child => write!(f, "CHILD"),
            Role::Parent => write!(f, "PARENT"),
            Role::Teacher => write!(f, "TEACHER"),
        }
    }
}

/// A chore assigned to a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: String,
    pub base_points: u32,
    pub completed: bool,
    /// 1..=5, absent until a parent or teacher approves the task
    pub rating: Option<u8>,
    pub child_username: String,
    pub state: TaskState,
}

/// Lifecycle position of a task, derived from `completed` and `rating`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Open,
    Done,
    Rated,
}

/// Something a child would like to earn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: String,
    pub description: String,
    pub required_level: u32,
    pub approved: bool,
    pub purchased: bool,
    pub child_username: String,
    pub state: WishState,
}

/// Lifecycle position of a wish, derived from `approved` and `purchased`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishState {
    Pending,
    Approved,
    Purchased,
}

/// Points and level of a child, recomputed from approved tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildScore {
    pub username: String,
    pub total_points: u64,
    pub level: u8,
}

/// Currently logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
    pub role: Role,
}

/// Progress header shown above the task and wish tables.
///
/// Points, level and progress are only filled in for a child session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionHeader {
    pub session: Option<SessionInfo>,
    pub total_points: Option<u64>,
    pub level: Option<u8>,
    /// Points counted towards the progress bar, capped at `progress_max`
    pub progress: u64,
    pub progress_max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTaskRequest {
    pub child_username: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: String,
    pub base_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproveTaskRequest {
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWishRequest {
    pub description: String,
    pub required_level: i64,
}

/// Envelope for every state-changing call.
///
/// `warning` carries a persistence problem; the change itself was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse<T> {
    pub data: T,
    pub warning: Option<String>,
}

/// Error body returned by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable kind, e.g. `NOT_LOGGED_IN`
    pub kind: String,
    pub message: String,
}

//! Task entity and its OPEN → DONE → RATED lifecycle.
//!
//! Tasks are immutable values. A transition builds the next version of the
//! task and the service swaps it into the store by id.

use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::check_text;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Approval rating, always within `MIN_RATING..=MAX_RATING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
            return Err(DomainError::invalid(
                "rating",
                format!("must be between {} and {}, got {}", MIN_RATING, MAX_RATING, value),
            ));
        }
        Ok(Rating(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Open,
    Done,
    Rated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: String,
    title: String,
    description: String,
    due_date: NaiveDate,
    base_points: u32,
    completed: bool,
    rating: Option<Rating>,
    child_username: String,
}

impl Task {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Build a freshly assigned task in the OPEN state
    pub fn new(
        id: String,
        title: String,
        description: String,
        due_date: NaiveDate,
        base_points: i64,
        child_username: &str,
    ) -> Result<Self, DomainError> {
        Self::restore(id, title, description, due_date, base_points, false, None, child_username)
    }

    /// Rebuild a task from stored fields, enforcing every entity invariant
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: String,
        title: String,
        description: String,
        due_date: NaiveDate,
        base_points: i64,
        completed: bool,
        rating: Option<Rating>,
        child_username: &str,
    ) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::invalid("id", "cannot be empty"));
        }
        if title.trim().is_empty() {
            return Err(DomainError::invalid("title", "cannot be empty"));
        }
        let child_username = child_username.trim();
        if child_username.is_empty() {
            return Err(DomainError::invalid("child_username", "cannot be empty"));
        }
        check_text("id", &id)?;
        check_text("title", &title)?;
        check_text("description", &description)?;
        check_text("child_username", child_username)?;
        if base_points <= 0 {
            return Err(DomainError::invalid("base_points", "must be positive"));
        }
        let base_points = u32::try_from(base_points)
            .map_err(|_| DomainError::invalid("base_points", "is too large"))?;
        if rating.is_some() && !completed {
            return Err(DomainError::invalid("rating", "a rated task must be completed"));
        }

        Ok(Self {
            id,
            title,
            description,
            due_date,
            base_points,
            completed,
            rating,
            child_username: child_username.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn base_points(&self) -> u32 {
        self.base_points
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn child_username(&self) -> &str {
        &self.child_username
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.child_username == username
    }

    pub fn state(&self) -> TaskState {
        match (self.completed, self.rating) {
            (_, Some(_)) => TaskState::Rated,
            (true, None) => TaskState::Done,
            (false, None) => TaskState::Open,
        }
    }

    /// OPEN → DONE. Completing a DONE task again changes nothing.
    pub fn mark_completed(&self) -> Result<Task, DomainError> {
        match self.state() {
            TaskState::Open => Ok(Task {
                completed: true,
                ..self.clone()
            }),
            TaskState::Done => Ok(self.clone()),
            TaskState::Rated => Err(DomainError::AlreadyRated(self.id.clone())),
        }
    }

    /// DONE → RATED
    pub fn approve(&self, rating: Rating) -> Result<Task, DomainError> {
        match self.state() {
            TaskState::Open => Err(DomainError::NotCompleted(self.id.clone())),
            TaskState::Done => Ok(Task {
                rating: Some(rating),
                ..self.clone()
            }),
            TaskState::Rated => Err(DomainError::AlreadyRated(self.id.clone())),
        }
    }
}

pub fn parse_due_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
        .map_err(|e| DomainError::invalid("due_date", format!("'{}' is not YYYY-MM-DD ({})", raw.trim(), e)))
}

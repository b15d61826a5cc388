//! # Flat-File Task Repository
//!
//! Keeps every task in one `|`-delimited text file, one task per line:
//!
//! ```text
//! id|title|description|dueDate|basePoints|completed|rating|childUsername
//! 5f0c…|Dishes||2025-01-10|60|true|3|alice
//! 9a12…|Homework|Page 12\pexercises 1-4|2025-01-11|100|false||alice
//! ```
//!
//! `id`, `title`, `description` and `childUsername` are escaped (see `codec`);
//! `rating` is empty until the task has been approved.

use anyhow::Result;
use csv::StringRecord;
use log::{debug, info, warn};

use super::codec;
use super::connection::FlatFileConnection;
use crate::domain::models::task::DUE_DATE_FORMAT;
use crate::domain::models::{parse_due_date, Rating, Task};
use crate::storage::traits::TaskStorage;

const TASK_FIELDS: usize = 8;

/// One line of the tasks file, still as text
#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskRecord {
    id: String,
    title: String,
    description: String,
    due_date: String,
    base_points: String,
    completed: String,
    rating: String,
    child_username: String,
}

impl TaskRecord {
    /// `None` for lines with fewer than eight fields
    fn from_line(line: &StringRecord) -> Option<Self> {
        if line.len() < TASK_FIELDS {
            return None;
        }
        let field = |i: usize| line.get(i).unwrap_or_default().to_string();
        Some(TaskRecord {
            id: codec::unescape(&field(0)),
            title: codec::unescape(&field(1)),
            description: codec::unescape(&field(2)),
            due_date: field(3),
            base_points: field(4),
            completed: field(5),
            rating: field(6),
            child_username: codec::unescape(&field(7)),
        })
    }

    fn into_line(self) -> Vec<String> {
        vec![
            codec::escape(&self.id),
            codec::escape(&self.title),
            codec::escape(&self.description),
            self.due_date,
            self.base_points,
            self.completed,
            self.rating,
            codec::escape(&self.child_username),
        ]
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            id: task.id().to_string(),
            title: task.title().to_string(),
            description: task.description().to_string(),
            due_date: task.due_date().format(DUE_DATE_FORMAT).to_string(),
            base_points: task.base_points().to_string(),
            completed: codec::format_flag(task.is_completed()).to_string(),
            rating: task.rating().map(|r| r.to_string()).unwrap_or_default(),
            child_username: task.child_username().to_string(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = anyhow::Error;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let due_date = parse_due_date(&record.due_date)?;
        let base_points = record
            .base_points
            .trim()
            .parse::<i64>()
            .map_err(|e| anyhow::anyhow!("Invalid base points '{}': {}", record.base_points, e))?;
        let rating = match record.rating.trim() {
            "" => None,
            raw => {
                let value = raw
                    .parse::<i64>()
                    .map_err(|e| anyhow::anyhow!("Invalid rating '{}': {}", raw, e))?;
                Some(Rating::new(value)?)
            }
        };

        Ok(Task::restore(
            record.id,
            record.title,
            record.description,
            due_date,
            base_points,
            codec::parse_flag(&record.completed),
            rating,
            &record.child_username,
        )?)
    }
}

/// Task repository backed by the tasks file of a [`FlatFileConnection`]
#[derive(Debug, Clone)]
pub struct TaskRepository {
    connection: FlatFileConnection,
}

impl TaskRepository {
    pub fn new(connection: FlatFileConnection) -> Self {
        Self { connection }
    }
}

impl TaskStorage for TaskRepository {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.connection.tasks_path();
        let mut tasks = Vec::new();

        for (index, line) in codec::read_records(&path)?.iter().enumerate() {
            let Some(record) = TaskRecord::from_line(line) else {
                debug!("Skipping short task record on line {}", index + 1);
                continue;
            };
            match Task::try_from(record) {
                Ok(task) => tasks.push(task),
                Err(e) => {
                    warn!("Failed to parse task record on line {}: {}. Skipping.", index + 1, e);
                    continue;
                }
            }
        }

        info!("Loaded {} tasks from {:?}", tasks.len(), path);
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.connection.ensure_base_directory()?;
        let path = self.connection.tasks_path();
        codec::write_records(&path, tasks.iter().map(|t| TaskRecord::from(t).into_line()))?;
        debug!("Saved {} tasks to {:?}", tasks.len(), path);
        Ok(())
    }
}

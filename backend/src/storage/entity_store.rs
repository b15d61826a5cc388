//! # Entity Store
//!
//! In-memory task and wish lists. Insertion order is kept and is the order
//! every query returns, since tables are rendered in that order. Lookups are
//! linear; the lists are only as long as a family can type.

use crate::domain::error::DomainError;
use crate::domain::models::{Task, Wish};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    tasks: Vec<Task>,
    wishes: Vec<Wish>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), DomainError> {
        if self.find_task_by_id(task.id()).is_some() {
            return Err(DomainError::DuplicateId(task.id().to_string()));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn add_wish(&mut self, wish: Wish) -> Result<(), DomainError> {
        if self.find_wish_by_id(wish.id()).is_some() {
            return Err(DomainError::DuplicateId(wish.id().to_string()));
        }
        self.wishes.push(wish);
        Ok(())
    }

    pub fn find_task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn find_wish_by_id(&self, id: &str) -> Option<&Wish> {
        self.wishes.iter().find(|w| w.id() == id)
    }

    /// Swap in a new version of an existing task, keeping its position
    pub fn replace_task(&mut self, task: Task) -> Result<(), DomainError> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id() == task.id())
            .ok_or_else(|| DomainError::NotFound(task.id().to_string()))?;
        *slot = task;
        Ok(())
    }

    /// Swap in a new version of an existing wish, keeping its position
    pub fn replace_wish(&mut self, wish: Wish) -> Result<(), DomainError> {
        let slot = self
            .wishes
            .iter_mut()
            .find(|w| w.id() == wish.id())
            .ok_or_else(|| DomainError::NotFound(wish.id().to_string()))?;
        *slot = wish;
        Ok(())
    }

    pub fn tasks_of<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.is_owned_by(username))
    }

    pub fn wishes_of<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Wish> + 'a {
        self.wishes.iter().filter(move |w| w.child_username() == username)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn wishes(&self) -> &[Wish] {
        &self.wishes
    }
}

//! # KidTask Backend
//!
//! Chore and wish tracking for a family: parents and teachers assign tasks,
//! children complete them and earn points, children wish for things and
//! parents approve the wishes.
//!
//! ## Architecture
//!
//! - **domain**: entities, scoring, authorization and the two services
//! - **storage**: in-memory store plus the flat-file repositories
//! - **io**: HTTP adapter for a presentation layer
//!
//! [`Backend`] ties them together. It owns the session and the store, routes
//! every mutation through the services and rewrites the affected file
//! afterwards. A failed rewrite is reported as a warning next to the result;
//! the in-memory change stands.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use log::{info, warn};

use domain::commands::session::LoginCommand;
use domain::commands::task::{AddTaskCommand, ApproveTaskCommand, CompleteTaskCommand};
use domain::commands::wish::{AddWishCommand, ApproveWishCommand};
use domain::models::{ChildScore, Role, Task, User, Wish};
use domain::scoring::score_of;
use domain::{DomainError, Session, TaskService, WishService};
use storage::{EntityStore, FlatFileConnection, TaskRepository, TaskStorage, WishRepository, WishStorage};

/// Result of a mutation that went through, plus a persistence warning if the
/// file could not be rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<DomainError>,
}

impl<T> Persisted<T> {
    fn new(value: T, warning: Option<DomainError>) -> Self {
        Self { value, warning }
    }
}

/// What the header bar shows for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub user: User,
    /// Only for children
    pub score: Option<ChildScore>,
}

pub struct Backend {
    session: Session,
    store: EntityStore,
    task_service: TaskService,
    wish_service: WishService,
    task_storage: Box<dyn TaskStorage>,
    wish_storage: Box<dyn WishStorage>,
}

impl Backend {
    /// Load both files of `connection` into a fresh store
    pub fn open(connection: FlatFileConnection) -> Result<Self> {
        Self::with_storage(
            Box::new(TaskRepository::new(connection.clone())),
            Box::new(WishRepository::new(connection)),
        )
    }

    pub fn with_storage(
        task_storage: Box<dyn TaskStorage>,
        wish_storage: Box<dyn WishStorage>,
    ) -> Result<Self> {
        let mut store = EntityStore::new();

        for task in task_storage.load_tasks().context("Failed to load tasks")? {
            if let Err(e) = store.add_task(task) {
                warn!("Skipping stored task: {}", e);
            }
        }
        for wish in wish_storage.load_wishes().context("Failed to load wishes")? {
            if let Err(e) = store.add_wish(wish) {
                warn!("Skipping stored wish: {}", e);
            }
        }

        info!(
            "Backend ready with {} tasks and {} wishes",
            store.tasks().len(),
            store.wishes().len()
        );
        Ok(Self {
            session: Session::new(),
            store,
            task_service: TaskService::new(),
            wish_service: WishService::new(),
            task_storage,
            wish_storage,
        })
    }

    // Session

    pub fn login(&mut self, command: LoginCommand) -> Result<User, DomainError> {
        self.session
            .login(&command.username, command.role)
            .map(|user| user.clone())
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `None` when nobody is logged in
    pub fn header(&self) -> Option<SessionSummary> {
        let user = self.session.current_user()?;
        let score = (user.role() == Role::Child).then(|| self.score_of(user.username()));
        Some(SessionSummary {
            user: user.clone(),
            score,
        })
    }

    // Tasks

    pub fn add_task(&mut self, command: AddTaskCommand) -> Result<Persisted<Task>, DomainError> {
        let task = self.task_service.add_task(&self.session, &mut self.store, command)?;
        Ok(Persisted::new(task, self.persist_tasks()))
    }

    pub fn complete_task(&mut self, command: CompleteTaskCommand) -> Result<Persisted<Task>, DomainError> {
        let task = self.task_service.complete_task(&self.session, &mut self.store, command)?;
        Ok(Persisted::new(task, self.persist_tasks()))
    }

    pub fn approve_task(&mut self, command: ApproveTaskCommand) -> Result<Persisted<Task>, DomainError> {
        let task = self.task_service.approve_task(&self.session, &mut self.store, command)?;
        Ok(Persisted::new(task, self.persist_tasks()))
    }

    // Wishes

    pub fn add_wish(&mut self, command: AddWishCommand) -> Result<Persisted<Wish>, DomainError> {
        let wish = self.wish_service.add_wish(&self.session, &mut self.store, command)?;
        Ok(Persisted::new(wish, self.persist_wishes()))
    }

    pub fn approve_wish(&mut self, command: ApproveWishCommand) -> Result<Persisted<Wish>, DomainError> {
        let wish = self.wish_service.approve_wish(&self.session, &mut self.store, command)?;
        Ok(Persisted::new(wish, self.persist_wishes()))
    }

    // Queries

    pub fn tasks_of<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.store.tasks_of(username)
    }

    pub fn wishes_of<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a Wish> + 'a {
        self.store.wishes_of(username)
    }

    pub fn score_of(&self, username: &str) -> ChildScore {
        score_of(username, self.store.tasks())
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Rewrite both files now
    pub fn save(&self) -> Result<(), DomainError> {
        match (self.persist_tasks(), self.persist_wishes()) {
            (Some(warning), _) | (None, Some(warning)) => Err(warning),
            (None, None) => {
                info!("Saved all data");
                Ok(())
            }
        }
    }

    fn persist_tasks(&self) -> Option<DomainError> {
        self.task_storage
            .save_tasks(self.store.tasks())
            .err()
            .map(|e| persistence_warning("tasks", e))
    }

    fn persist_wishes(&self) -> Option<DomainError> {
        self.wish_storage
            .save_wishes(self.store.wishes())
            .err()
            .map(|e| persistence_warning("wishes", e))
    }
}

fn persistence_warning(what: &str, error: anyhow::Error) -> DomainError {
    warn!("Could not save {}: {:#}", what, error);
    DomainError::PersistenceWarning(format!("Could not save {}: {:#}", what, error))
}

//! Task service: the only place tasks are created or change state.
//!
//! Every operation runs the authorization gate first, then the entity
//! preconditions, and only then writes to the store. A rejected call leaves
//! the store untouched.
//!
//! ## State machine
//!
//! - create → OPEN (PARENT or TEACHER)
//! - OPEN → DONE via `complete_task` (owning CHILD; repeat on DONE is a no-op)
//! - DONE → RATED via `approve_task` (PARENT or TEACHER; RATED is terminal)

use log::{debug, info};

use crate::domain::authorization::{authorize, authorize_task_owner, Action};
use crate::domain::commands::task::{AddTaskCommand, ApproveTaskCommand, CompleteTaskCommand};
use crate::domain::error::DomainError;
use crate::domain::models::{parse_due_date, Rating, Task};
use crate::domain::session::Session;
use crate::storage::EntityStore;

#[derive(Debug, Clone, Default)]
pub struct TaskService;

impl TaskService {
    pub fn new() -> Self {
        Self
    }

    /// Assign a new OPEN task to a child
    pub fn add_task(
        &self,
        session: &Session,
        store: &mut EntityStore,
        command: AddTaskCommand,
    ) -> Result<Task, DomainError> {
        let user = authorize(session, Action::AddTask)?;
        debug!("{} adding task {:?}", user.username(), command);

        let due_date = parse_due_date(&command.due_date)?;
        let task = Task::new(
            Task::generate_id(),
            command.title,
            command.description,
            due_date,
            command.base_points,
            &command.child_username,
        )?;

        store.add_task(task.clone())?;
        info!(
            "{} assigned task {} '{}' to {} ({} points)",
            user.username(),
            task.id(),
            task.title(),
            task.child_username(),
            task.base_points()
        );
        Ok(task)
    }

    /// Mark one of the child's own tasks as done
    pub fn complete_task(
        &self,
        session: &Session,
        store: &mut EntityStore,
        command: CompleteTaskCommand,
    ) -> Result<Task, DomainError> {
        let user = authorize(session, Action::CompleteTask)?;
        let task = store
            .find_task_by_id(&command.task_id)
            .ok_or_else(|| DomainError::NotFound(command.task_id.clone()))?;
        authorize_task_owner(user, task)?;

        let updated = task.mark_completed()?;
        if updated == *task {
            debug!("Task {} already completed", updated.id());
            return Ok(updated);
        }

        store.replace_task(updated.clone())?;
        info!("{} completed task {}", user.username(), updated.id());
        Ok(updated)
    }

    /// Rate a completed task, which makes it count towards the child's score
    pub fn approve_task(
        &self,
        session: &Session,
        store: &mut EntityStore,
        command: ApproveTaskCommand,
    ) -> Result<Task, DomainError> {
        let user = authorize(session, Action::ApproveTask)?;
        let task = store
            .find_task_by_id(&command.task_id)
            .ok_or_else(|| DomainError::NotFound(command.task_id.clone()))?;
        let rating = Rating::new(command.rating)?;

        let updated = task.approve(rating)?;
        store.replace_task(updated.clone())?;
        info!(
            "{} approved task {} for {} with rating {}",
            user.username(),
            updated.id(),
            updated.child_username(),
            rating
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Role, TaskState};
    use crate::domain::scoring::score_of;

    fn session_as(username: &str, role: Role) -> Session {
        let mut session = Session::new();
        session.login(username, role).unwrap();
        session
    }

    fn add_command(child: &str, base_points: i64) -> AddTaskCommand {
        AddTaskCommand {
            child_username: child.to_string(),
            title: "Dishes".to_string(),
            description: String::new(),
            due_date: "2025-01-10".to_string(),
            base_points,
        }
    }

    fn complete(task_id: &str) -> CompleteTaskCommand {
        CompleteTaskCommand {
            task_id: task_id.to_string(),
        }
    }

    fn approve(task_id: &str, rating: i64) -> ApproveTaskCommand {
        ApproveTaskCommand {
            task_id: task_id.to_string(),
            rating,
        }
    }

    #[test]
    fn test_parent_assigns_child_completes_parent_rates() {
        let service = TaskService::new();
        let mut store = EntityStore::new();

        let parent = session_as("mom", Role::Parent);
        let task = service.add_task(&parent, &mut store, add_command("alice", 60)).unwrap();
        assert_eq!(task.state(), TaskState::Open);
        assert_eq!(task.child_username(), "alice");

        let alice = session_as("alice", Role::Child);
        let done = service.complete_task(&alice, &mut store, complete(task.id())).unwrap();
        assert_eq!(done.state(), TaskState::Done);

        let rated = service.approve_task(&parent, &mut store, approve(task.id(), 3)).unwrap();
        assert_eq!(rated.state(), TaskState::Rated);

        let score = score_of("alice", store.tasks());
        assert_eq!((score.total_points, score.level), (60, 1));
    }

    #[test]
    fn test_rerating_is_rejected_and_score_unchanged() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let alice = session_as("alice", Role::Child);

        let task = service.add_task(&parent, &mut store, add_command("alice", 60)).unwrap();
        service.complete_task(&alice, &mut store, complete(task.id())).unwrap();
        service.approve_task(&parent, &mut store, approve(task.id(), 3)).unwrap();

        let err = service.approve_task(&parent, &mut store, approve(task.id(), 5)).unwrap_err();
        assert_eq!(err, DomainError::AlreadyRated(task.id().to_string()));
        assert_eq!(score_of("alice", store.tasks()).total_points, 60);
    }

    #[test]
    fn test_teacher_task_adds_to_existing_score() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let teacher = session_as("mr_t", Role::Teacher);
        let alice = session_as("alice", Role::Child);

        let t1 = service.add_task(&parent, &mut store, add_command("alice", 60)).unwrap();
        service.complete_task(&alice, &mut store, complete(t1.id())).unwrap();
        service.approve_task(&parent, &mut store, approve(t1.id(), 3)).unwrap();

        let t2 = service.add_task(&teacher, &mut store, add_command("alice", 100)).unwrap();
        service.complete_task(&alice, &mut store, complete(t2.id())).unwrap();
        service.approve_task(&teacher, &mut store, approve(t2.id(), 5)).unwrap();

        let score = score_of("alice", store.tasks());
        assert_eq!((score.total_points, score.level), (227, 2));
    }

    #[test]
    fn test_child_cannot_complete_someone_elses_task() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let bob_task = service.add_task(&parent, &mut store, add_command("bob", 20)).unwrap();

        let alice = session_as("alice", Role::Child);
        let err = service.complete_task(&alice, &mut store, complete(bob_task.id())).unwrap_err();
        assert_eq!(err, DomainError::NotOwner(bob_task.id().to_string()));
        assert!(!store.find_task_by_id(bob_task.id()).unwrap().is_completed());
    }

    #[test]
    fn test_complete_is_idempotent_until_rated() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let alice = session_as("alice", Role::Child);
        let task = service.add_task(&parent, &mut store, add_command("alice", 20)).unwrap();

        service.complete_task(&alice, &mut store, complete(task.id())).unwrap();
        let again = service.complete_task(&alice, &mut store, complete(task.id())).unwrap();
        assert_eq!(again.state(), TaskState::Done);

        service.approve_task(&parent, &mut store, approve(task.id(), 2)).unwrap();
        let err = service.complete_task(&alice, &mut store, complete(task.id())).unwrap_err();
        assert_eq!(err, DomainError::AlreadyRated(task.id().to_string()));
    }

    #[test]
    fn test_approve_before_complete_is_rejected() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let task = service.add_task(&parent, &mut store, add_command("alice", 20)).unwrap();

        let err = service.approve_task(&parent, &mut store, approve(task.id(), 4)).unwrap_err();
        assert_eq!(err, DomainError::NotCompleted(task.id().to_string()));
        assert_eq!(store.find_task_by_id(task.id()).unwrap().rating(), None);
    }

    #[test]
    fn test_rating_boundaries() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let parent = session_as("mom", Role::Parent);
        let alice = session_as("alice", Role::Child);

        let low = service.add_task(&parent, &mut store, add_command("alice", 30)).unwrap();
        let high = service.add_task(&parent, &mut store, add_command("alice", 30)).unwrap();
        for task in [&low, &high] {
            service.complete_task(&alice, &mut store, complete(task.id())).unwrap();
        }

        for bad in [0, 6] {
            let err = service.approve_task(&parent, &mut store, approve(low.id(), bad)).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput { field: "rating", .. }));
        }

        service.approve_task(&parent, &mut store, approve(low.id(), 1)).unwrap();
        service.approve_task(&parent, &mut store, approve(high.id(), 5)).unwrap();
        assert_eq!(score_of("alice", store.tasks()).total_points, 10 + 50);
    }

    #[test]
    fn test_add_task_validation() {
        let service = TaskService::new();
        let mut store = EntityStore::new();
        let teacher = session_as("mr_t", Role::Teacher);

        let mut bad_date = add_command("alice", 10);
        bad_date.due_date = "next tuesday".to_string();
        let err = service.add_task(&teacher, &mut store, bad_date).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { field: "due_date", .. }));

        let err = service.add_task(&teacher, &mut store, add_command("alice", 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { field: "base_points", .. }));

        let err = service.add_task(&teacher, &mut store, add_command("  ", 10)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { field: "child_username", .. }));

        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_gate_runs_before_lookup() {
        let service = TaskService::new();
        let mut store = EntityStore::new();

        let nobody = Session::new();
        assert_eq!(
            service.complete_task(&nobody, &mut store, complete("missing")).unwrap_err(),
            DomainError::NotLoggedIn
        );

        let parent = session_as("mom", Role::Parent);
        assert!(matches!(
            service.complete_task(&parent, &mut store, complete("missing")).unwrap_err(),
            DomainError::RoleForbidden(_)
        ));

        let alice = session_as("alice", Role::Child);
        assert_eq!(
            service.complete_task(&alice, &mut store, complete("missing")).unwrap_err(),
            DomainError::NotFound("missing".to_string())
        );

        assert!(matches!(
            service.add_task(&alice, &mut store, add_command("alice", 10)).unwrap_err(),
            DomainError::RoleForbidden(_)
        ));
    }
}

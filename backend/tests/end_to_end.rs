//! Family scenarios driven through `Backend`, checked again after the data
//! has been written to disk and loaded into a fresh backend.

use kidtask_backend::domain::commands::session::LoginCommand;
use kidtask_backend::domain::commands::task::{AddTaskCommand, ApproveTaskCommand, CompleteTaskCommand};
use kidtask_backend::domain::commands::wish::{AddWishCommand, ApproveWishCommand};
use kidtask_backend::domain::models::{ChildScore, Role, TaskState, WishState};
use kidtask_backend::domain::DomainError;
use kidtask_backend::storage::FlatFileConnection;
use kidtask_backend::Backend;
use tempfile::TempDir;

fn login(backend: &mut Backend, username: &str, role: Role) {
    backend
        .login(LoginCommand {
            username: username.to_string(),
            role,
        })
        .unwrap();
}

fn add_task(backend: &mut Backend, child: &str, title: &str, base_points: i64) -> String {
    let persisted = backend
        .add_task(AddTaskCommand {
            child_username: child.to_string(),
            title: title.to_string(),
            description: String::new(),
            due_date: "2025-01-10".to_string(),
            base_points,
        })
        .unwrap();
    assert_eq!(persisted.warning, None);
    persisted.value.id().to_string()
}

fn complete(backend: &mut Backend, task_id: &str) -> Result<TaskState, DomainError> {
    backend
        .complete_task(CompleteTaskCommand {
            task_id: task_id.to_string(),
        })
        .map(|p| p.value.state())
}

fn approve(backend: &mut Backend, task_id: &str, rating: i64) -> Result<TaskState, DomainError> {
    backend
        .approve_task(ApproveTaskCommand {
            task_id: task_id.to_string(),
            rating,
        })
        .map(|p| p.value.state())
}

fn score(total_points: u64, level: u8) -> ChildScore {
    ChildScore { total_points, level }
}

#[test]
fn family_week_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let connection = FlatFileConnection::new(temp_dir.path());
    let mut backend = Backend::open(connection.clone()).unwrap();

    // Parent assigns, child completes, parent rates
    login(&mut backend, "mom", Role::Parent);
    let t1 = add_task(&mut backend, "alice", "Dishes", 60);
    login(&mut backend, "alice", Role::Child);
    assert_eq!(complete(&mut backend, &t1), Ok(TaskState::Done));
    login(&mut backend, "mom", Role::Parent);
    assert_eq!(approve(&mut backend, &t1, 3), Ok(TaskState::Rated));
    assert_eq!(backend.score_of("alice"), score(60, 1));

    // Re-rating is refused and changes nothing
    assert_eq!(
        approve(&mut backend, &t1, 5),
        Err(DomainError::AlreadyRated(t1.clone()))
    );
    assert_eq!(backend.score_of("alice"), score(60, 1));

    // Wish approved by a parent
    login(&mut backend, "bob", Role::Child);
    let wish = backend
        .add_wish(AddWishCommand {
            description: "Lego".to_string(),
            required_level: 3,
        })
        .unwrap()
        .value;
    login(&mut backend, "mom", Role::Parent);
    let approved = backend
        .approve_wish(ApproveWishCommand {
            wish_id: wish.id().to_string(),
        })
        .unwrap()
        .value;
    assert!(approved.is_approved());
    assert!(!approved.is_purchased());
    assert_eq!(backend.score_of("bob"), score(0, 1));

    // Teacher task rated 5 rounds 166.67 up to 167
    login(&mut backend, "mr_t", Role::Teacher);
    let t2 = add_task(&mut backend, "alice", "Reading log", 100);
    login(&mut backend, "alice", Role::Child);
    complete(&mut backend, &t2).unwrap();
    login(&mut backend, "mr_t", Role::Teacher);
    approve(&mut backend, &t2, 5).unwrap();
    assert_eq!(backend.score_of("alice"), score(227, 2));

    // A child cannot complete a sibling's task
    login(&mut backend, "mom", Role::Parent);
    let bobs = add_task(&mut backend, "bob", "Trash", 20);
    login(&mut backend, "alice", Role::Child);
    assert_eq!(complete(&mut backend, &bobs), Err(DomainError::NotOwner(bobs.clone())));

    let before = backend.store().clone();
    drop(backend);

    let reloaded = Backend::open(connection).unwrap();
    assert_eq!(reloaded.store(), &before);
    assert!(reloaded.current_user().is_none());
    assert_eq!(reloaded.score_of("alice"), score(227, 2));
    assert_eq!(reloaded.score_of("bob"), score(0, 1));

    let wishes: Vec<_> = reloaded.wishes_of("bob").collect();
    assert_eq!(wishes.len(), 1);
    assert_eq!(wishes[0].state(), WishState::Approved);

    let alice_titles: Vec<&str> = reloaded.tasks_of("alice").map(|t| t.title()).collect();
    assert_eq!(alice_titles, vec!["Dishes", "Reading log"]);
}

#[test]
fn special_characters_survive_reload() {
    let temp_dir = TempDir::new().unwrap();
    let connection = FlatFileConnection::new(temp_dir.path());

    {
        let mut backend = Backend::open(connection.clone()).unwrap();
        login(&mut backend, "mom", Role::Parent);
        add_task(&mut backend, "alice", "A|B\nC", 10);
        login(&mut backend, "alice", Role::Child);
        backend
            .add_wish(AddWishCommand {
                description: "C:\\games\\p|q".to_string(),
                required_level: 2,
            })
            .unwrap();
    }

    let tasks_file = std::fs::read_to_string(temp_dir.path().join("Tasks.txt")).unwrap();
    assert_eq!(tasks_file.lines().count(), 1);

    let reloaded = Backend::open(connection).unwrap();
    let task = reloaded.tasks_of("alice").next().unwrap();
    assert_eq!(task.title().as_bytes(), "A|B\nC".as_bytes());
    let wish = reloaded.wishes_of("alice").next().unwrap();
    assert_eq!(wish.description(), "C:\\games\\p|q");
}

#[test]
fn rating_boundaries_and_levels() {
    let temp_dir = TempDir::new().unwrap();
    let mut backend = Backend::open(FlatFileConnection::new(temp_dir.path())).unwrap();

    login(&mut backend, "mom", Role::Parent);
    let tiny = add_task(&mut backend, "carol", "Feed fish", 1);
    let small = add_task(&mut backend, "carol", "Water plants", 3);
    let big = add_task(&mut backend, "carol", "Clean garage", 480);

    login(&mut backend, "carol", Role::Child);
    for id in [&tiny, &small, &big] {
        complete(&mut backend, id).unwrap();
    }

    login(&mut backend, "mom", Role::Parent);
    for bad in [0, 6] {
        assert!(matches!(
            approve(&mut backend, &tiny, bad),
            Err(DomainError::InvalidInput { field: "rating", .. })
        ));
    }
    approve(&mut backend, &tiny, 1).unwrap();
    assert_eq!(backend.score_of("carol"), score(0, 1));
    approve(&mut backend, &small, 5).unwrap();
    assert_eq!(backend.score_of("carol"), score(5, 1));
    approve(&mut backend, &big, 5).unwrap();
    assert_eq!(backend.score_of("carol"), score(805, 5));
}

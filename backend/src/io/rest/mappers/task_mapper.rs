use shared::{AddTaskRequest, ApproveTaskRequest, Task, TaskState};

use crate::domain::commands::task::{AddTaskCommand, ApproveTaskCommand, CompleteTaskCommand};
use crate::domain::models::task::{Task as DomainTask, TaskState as DomainTaskState, DUE_DATE_FORMAT};

pub struct TaskMapper;

impl TaskMapper {
    pub fn state_to_dto(domain_state: DomainTaskState) -> TaskState {
        match domain_state {
            DomainTaskState::Open => TaskState::Open,
            DomainTaskState::Done => TaskState::Done,
            DomainTaskState::Rated => TaskState::Rated,
        }
    }

    /// Convert domain Task to shared Task DTO
    pub fn to_dto(domain: &DomainTask) -> Task {
        Task {
            id: domain.id().to_string(),
            title: domain.title().to_string(),
            description: domain.description().to_string(),
            due_date: domain.due_date().format(DUE_DATE_FORMAT).to_string(),
            base_points: domain.base_points(),
            completed: domain.is_completed(),
            rating: domain.rating().map(|r| r.value()),
            child_username: domain.child_username().to_string(),
            state: Self::state_to_dto(domain.state()),
        }
    }

    pub fn to_dto_list<'a, I>(domain_tasks: I) -> Vec<Task>
    where
        I: IntoIterator<Item = &'a DomainTask>,
    {
        domain_tasks.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_add_command(request: AddTaskRequest) -> AddTaskCommand {
        AddTaskCommand {
            child_username: request.child_username,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            base_points: request.base_points,
        }
    }

    pub fn to_complete_command(task_id: String) -> CompleteTaskCommand {
        CompleteTaskCommand { task_id }
    }

    pub fn to_approve_command(task_id: String, request: ApproveTaskRequest) -> ApproveTaskCommand {
        ApproveTaskCommand {
            task_id,
            rating: request.rating,
        }
    }
}

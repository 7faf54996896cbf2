//! Service-level errors for task use cases.

use crate::authorization::domain::AuthorizationError;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Errors returned by the task use cases.
///
/// Each kind is distinct so a presentation layer can map it to its own
/// response without inspecting messages.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input failed validation; raised before any authorization check.
    #[error("invalid task input: {0}")]
    Validation(TaskDomainError),

    /// The active authorization strategy denied the actor.
    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),

    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The requested transition is illegal for the task's current status.
    #[error("invalid task state: {0}")]
    InvalidState(TaskDomainError),

    /// The persistence port failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskDomainError> for TaskServiceError {
    fn from(err: TaskDomainError) -> Self {
        if err.is_validation() {
            Self::Validation(err)
        } else {
            Self::InvalidState(err)
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task use case operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

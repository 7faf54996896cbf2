//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title is {actual} characters long, maximum is {max}")]
    TitleTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected title.
        actual: usize,
    },

    /// The task has already been completed.
    #[error("task {} is already completed", display_task_id(.task_id))]
    AlreadyCompleted {
        /// Identifier of the task, if it has been saved.
        task_id: Option<TaskId>,
    },
}

impl TaskDomainError {
    /// Returns `true` for input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::TitleTooLong { .. })
    }
}

fn display_task_id(task_id: &Option<TaskId>) -> String {
    task_id.map_or_else(|| "<unsaved>".to_owned(), |id| id.to_string())
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

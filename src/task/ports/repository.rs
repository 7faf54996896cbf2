//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository is the only source of truth for stored tasks; callers keep
/// no cache of their own.
///
/// # Implementation Notes
///
/// Implementations must:
/// - Write each record atomically, so readers never see a partial update
/// - Provide read-after-write consistency for a single task identity
/// - Surface backend failures without retrying
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a task and returns the resulting entity state.
    ///
    /// A task without an identity is inserted and receives a newly assigned
    /// [`TaskId`]. A task with an identity updates the mutable fields
    /// (status and lifecycle timestamps) of the existing record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when updating a task whose
    /// record does not exist.
    async fn save(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Loads a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record exists for
    /// `id`.
    async fn find(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored record is completed and accepts no further updates.
    #[error("task {0} is completed and cannot be updated")]
    Conflict(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

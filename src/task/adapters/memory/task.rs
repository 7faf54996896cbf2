//! In-memory repository for task lifecycle tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Updates touch only the status and lifecycle timestamps of the stored
/// record. Completed records reject further updates.
///
/// Identifiers are assigned from a counter starting at 1 unless configured
/// otherwise with [`Self::starting_at`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository whose first assigned identifier is
    /// `first_id`.
    #[must_use]
    pub fn starting_at(first_id: TaskId) -> Self {
        let state = InMemoryTaskState {
            tasks: HashMap::new(),
            last_id: first_id.value().saturating_sub(1),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the lock is poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.len())
    }

    /// Returns `true` when no task has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the lock is poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn next_id(state: &mut InMemoryTaskState) -> TaskRepositoryResult<TaskId> {
    let value = state.last_id.checked_add(1).ok_or_else(|| {
        TaskRepositoryError::persistence(std::io::Error::other("task identifier space exhausted"))
    })?;
    state.last_id = value;
    Ok(TaskId::new(value))
}

/// Copies the mutable lifecycle fields of `update` onto `stored`.
fn apply_lifecycle_update(id: TaskId, stored: &Task, update: &Task) -> Task {
    Task::from_persisted(PersistedTaskData {
        id,
        title: stored.title().clone(),
        description: stored.description().to_owned(),
        status: update.status(),
        created_by: stored.created_by(),
        created_at: stored.created_at(),
        updated_at: update.updated_at(),
        completed_at: update.completed_at(),
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let Some(id) = task.id() else {
            let id = next_id(&mut state)?;
            let stored = task.with_id(id);
            state.tasks.insert(id, stored.clone());
            debug!(task_id = %id, "inserted task");
            return Ok(stored);
        };

        let existing = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        if existing.status().is_terminal() {
            return Err(TaskRepositoryError::Conflict(id));
        }
        *existing = apply_lifecycle_update(id, existing, &task);
        debug!(task_id = %id, status = existing.status().as_str(), "updated task");
        Ok(existing.clone())
    }

    async fn find(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

//! Targets of authorization decisions.

use crate::task::domain::Task;

/// What an actor is attempting to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    /// The collection new tasks are created in.
    TaskCollection,
    /// An existing, loaded task.
    Task(&'a Task),
}

impl<'a> Resource<'a> {
    /// Returns a short label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TaskCollection => "task_collection",
            Self::Task(_) => "task",
        }
    }

    /// Returns the task when the resource is an existing task.
    #[must_use]
    pub const fn task(&self) -> Option<&'a Task> {
        match *self {
            Self::TaskCollection => None,
            Self::Task(task) => Some(task),
        }
    }
}

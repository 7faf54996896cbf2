//! Domain model for task lifecycle management.
//!
//! Tasks are built in memory, completed in place, and handed to the
//! persistence port. Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Task, TaskStatus};

//! Application services for task use cases.
//!
//! Every use case authorizes the actor before it mutates or persists
//! anything.

mod complete_task;
mod create_task;
mod error;

pub use complete_task::CompleteTask;
pub use create_task::{CreateTask, CreateTaskRequest};
pub use error::{TaskServiceError, TaskServiceResult};

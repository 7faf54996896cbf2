//! Shared test helpers for in-memory use case integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskgate::authorization::domain::{Actor, ActorId};
use taskgate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{CreateTask, CreateTaskRequest},
};

/// Provides a fresh shared in-memory repository for each test.
#[fixture]
pub fn repository() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

/// Provides the system clock.
#[fixture]
pub fn clock() -> Arc<DefaultClock> {
    Arc::new(DefaultClock)
}

/// Provides an actor holding the `admin` role.
#[fixture]
pub fn admin() -> Actor {
    Actor::new(ActorId::new()).with_roles(["admin"])
}

/// Provides an actor holding only the `member` role.
#[fixture]
pub fn member() -> Actor {
    Actor::new(ActorId::new()).with_roles(["member"])
}

/// Creates a task through the given use case and returns its identifier.
///
/// # Errors
///
/// Returns an error if creation fails or the stored task has no identifier.
pub async fn create_as(
    use_case: &CreateTask<InMemoryTaskRepository, DefaultClock>,
    actor: &Actor,
    title: &str,
) -> Result<(Task, TaskId), eyre::Report> {
    let task = use_case
        .execute(Some(actor), CreateTaskRequest::new(title))
        .await?;
    let id = task
        .id()
        .ok_or_else(|| eyre::eyre!("created task has no identifier"))?;
    Ok((task, id))
}

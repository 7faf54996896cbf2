//! In-memory integration tests for task creation and completion.

use std::sync::Arc;

use super::helpers::{admin, clock, create_as, member, repository};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;
use taskgate::authorization::{
    AuthorizationContext,
    domain::Actor,
    strategies::{DenyAllStrategy, OwnerStrategy, RoleBasedStrategy},
};
use taskgate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{CompleteTask, CreateTask, CreateTaskRequest, TaskServiceError},
};

fn role_gate(role: &str) -> AuthorizationContext {
    AuthorizationContext::from_strategy(RoleBasedStrategy::new(role))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_can_be_found_and_completed(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
) -> Result<(), eyre::Report> {
    let create = CreateTask::new(Arc::clone(&repository), Arc::clone(&clock), role_gate("admin"));
    let complete = CompleteTask::new(Arc::clone(&repository), clock, role_gate("admin"));

    let (_, id) = create_as(&create, &admin, "Write spec").await?;
    let stored = repository.find(id).await?;
    ensure!(stored.status() == TaskStatus::Pending);

    let completed = complete.execute(Some(&admin), id).await?;
    ensure!(completed.status() == TaskStatus::Completed);

    let reloaded = repository.find(id).await?;
    ensure!(reloaded.is_completed(), "completion should be persisted");
    ensure!(reloaded.completed_at() == completed.completed_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_creation_leaves_store_untouched(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    member: Actor,
) -> Result<(), eyre::Report> {
    let create = CreateTask::new(Arc::clone(&repository), clock, role_gate("admin"));

    let result = create
        .execute(Some(&member), CreateTaskRequest::new("Write spec"))
        .await;

    ensure!(matches!(result, Err(TaskServiceError::Unauthorized(_))));
    ensure!(repository.is_empty()?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_completion_leaves_task_pending(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
    member: Actor,
) -> Result<(), eyre::Report> {
    let create = CreateTask::new(Arc::clone(&repository), Arc::clone(&clock), role_gate("admin"));
    let complete = CompleteTask::new(Arc::clone(&repository), clock, role_gate("admin"));
    let (_, id) = create_as(&create, &admin, "Write spec").await?;

    let result = complete.execute(Some(&member), id).await;

    ensure!(matches!(result, Err(TaskServiceError::Unauthorized(_))));
    let stored = repository.find(id).await?;
    ensure!(stored.status() == TaskStatus::Pending);
    ensure!(stored.completed_at().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_strategy_lets_only_the_creator_complete(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
    member: Actor,
) -> Result<(), eyre::Report> {
    let create = CreateTask::new(Arc::clone(&repository), Arc::clone(&clock), role_gate("member"));
    let complete = CompleteTask::new(
        Arc::clone(&repository),
        clock,
        AuthorizationContext::from_strategy(OwnerStrategy::new()),
    );
    let (created, id) = create_as(&create, &member, "Tidy backlog").await?;
    ensure!(created.created_by() == member.id());

    let by_admin = complete.execute(Some(&admin), id).await;
    ensure!(matches!(by_admin, Err(TaskServiceError::Unauthorized(_))));

    let by_owner = complete.execute(Some(&member), id).await?;
    ensure!(by_owner.is_completed());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_twice_reports_invalid_state(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
) -> Result<(), eyre::Report> {
    let create = CreateTask::new(Arc::clone(&repository), Arc::clone(&clock), role_gate("admin"));
    let complete = CompleteTask::new(Arc::clone(&repository), clock, role_gate("admin"));
    let (_, id) = create_as(&create, &admin, "Write spec").await?;

    let first = complete.execute(Some(&admin), id).await?;
    let second = complete.execute(Some(&admin), id).await;

    let Err(TaskServiceError::InvalidState(TaskDomainError::AlreadyCompleted { task_id })) = second
    else {
        bail!("expected invalid state, got {second:?}");
    };
    ensure!(task_id == Some(id));
    let stored = repository.find(id).await?;
    ensure!(stored.completed_at() == first.completed_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_unknown_task_is_not_found(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
) -> Result<(), eyre::Report> {
    let complete = CompleteTask::new(Arc::clone(&repository), clock, role_gate("admin"));

    let result = complete.execute(Some(&admin), TaskId::new(99)).await;

    let Err(TaskServiceError::NotFound(missing)) = result else {
        bail!("expected not found, got {result:?}");
    };
    ensure!(missing == TaskId::new(99));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn swapping_strategy_applies_to_subsequent_requests(
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<DefaultClock>,
    admin: Actor,
) -> Result<(), eyre::Report> {
    let mut create = CreateTask::new(Arc::clone(&repository), clock, role_gate("admin"));
    create_as(&create, &admin, "First").await?;

    create.set_strategy(Arc::new(DenyAllStrategy));
    let result = create
        .execute(Some(&admin), CreateTaskRequest::new("Second"))
        .await;

    ensure!(matches!(result, Err(TaskServiceError::Unauthorized(_))));
    ensure!(repository.len()? == 1);
    Ok(())
}

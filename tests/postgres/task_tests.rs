//! `PostgreSQL` integration tests for task persistence and use cases.

use std::sync::Arc;

use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskgate::authorization::{
    AuthorizationContext,
    domain::{Actor, ActorId},
    strategies::RoleBasedStrategy,
};
use taskgate::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CompleteTask, CreateTask, CreateTaskRequest, TaskServiceError},
};

use crate::postgres::helpers::{
    BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster, setup_repository,
};

struct TaskTestContext {
    repository: Arc<PostgresTaskRepository>,
    _temp_db: TemporaryDatabase,
}

#[fixture]
fn context(
    postgres_cluster: Result<PostgresCluster, BoxError>,
) -> Result<TaskTestContext, BoxError> {
    let (temp_db, repository) = setup_repository(postgres_cluster?)?;
    Ok(TaskTestContext {
        repository: Arc::new(repository),
        _temp_db: temp_db,
    })
}

fn unsaved_task(title: &str, created_by: ActorId) -> Task {
    Task::new(
        NewTask {
            title: TaskTitle::new(title).expect("valid title"),
            description: "stored in postgres".to_owned(),
            created_by,
        },
        &DefaultClock,
    )
}

fn saved_id(task: &Task) -> eyre::Result<TaskId> {
    task.id().ok_or_else(|| eyre::eyre!("saved task has no id"))
}

fn ready(context: Result<TaskTestContext, BoxError>) -> eyre::Result<TaskTestContext> {
    context.map_err(|err| eyre::eyre!("postgres test context unavailable: {err}"))
}

fn admin_only() -> AuthorizationContext {
    AuthorizationContext::from_strategy(RoleBasedStrategy::new("admin"))
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_identity_and_find_returns_it(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;
    let repository = &task_context.repository;
    let creator = ActorId::new();

    let first = repository.save(unsaved_task("First", creator)).await?;
    let second = repository.save(unsaved_task("Second", creator)).await?;
    let first_id = saved_id(&first)?;
    let found = repository.find(first_id).await?;

    ensure!(saved_id(&second)? != first_id);
    ensure!(found.title().as_str() == "First");
    ensure!(found.status() == TaskStatus::Pending);
    ensure!(found.created_by() == creator);
    ensure!(found.completed_at().is_none());
    Ok(())
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_completion_but_not_title_or_creator(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;
    let repository = &task_context.repository;
    let original = repository
        .save(unsaved_task("Original", ActorId::new()))
        .await?;
    let id = saved_id(&original)?;
    let mut rewritten = unsaved_task("Rewritten", ActorId::new()).with_id(id);
    rewritten.mark_complete(&DefaultClock)?;

    let updated = repository.save(rewritten).await?;
    let reloaded = repository.find(id).await?;

    ensure!(updated == reloaded, "save should return the stored row");
    ensure!(reloaded.title().as_str() == "Original");
    ensure!(reloaded.created_by() == original.created_by());
    ensure!(reloaded.status() == TaskStatus::Completed);
    ensure!(reloaded.completed_at().is_some());
    Ok(())
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_row_is_not_found(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;
    let ghost = unsaved_task("Ghost", ActorId::new()).with_id(TaskId::new(4_242));

    let result = task_context.repository.save(ghost).await;

    let Err(TaskRepositoryError::NotFound(id)) = result else {
        bail!("expected not found, got {result:?}");
    };
    ensure!(id == TaskId::new(4_242));
    Ok(())
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn stale_pending_copy_cannot_reopen_a_completed_row(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;
    let repository = &task_context.repository;
    let pending = repository
        .save(unsaved_task("Finish me", ActorId::new()))
        .await?;
    let id = saved_id(&pending)?;
    let mut completed = pending.clone();
    completed.mark_complete(&DefaultClock)?;
    repository.save(completed).await?;

    let result = repository.save(pending).await;

    let Err(TaskRepositoryError::Conflict(conflicting)) = result else {
        bail!("expected conflict, got {result:?}");
    };
    ensure!(conflicting == id);
    ensure!(repository.find(id).await?.status() == TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn find_missing_row_is_not_found(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;

    let result = task_context.repository.find(TaskId::new(99)).await;

    ensure!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(99)
    ));
    Ok(())
}

#[rstest]
#[ignore = "requires an embedded PostgreSQL cluster"]
#[tokio::test(flavor = "multi_thread")]
async fn use_cases_create_and_complete_against_postgres(
    context: Result<TaskTestContext, BoxError>,
) -> eyre::Result<()> {
    let task_context = ready(context)?;
    let clock = Arc::new(DefaultClock);
    let create = CreateTask::new(
        Arc::clone(&task_context.repository),
        Arc::clone(&clock),
        admin_only(),
    );
    let complete = CompleteTask::new(Arc::clone(&task_context.repository), clock, admin_only());
    let admin = Actor::new(ActorId::new()).with_roles(["admin"]);
    let guest = Actor::new(ActorId::new()).with_roles(["guest"]);

    let created = create
        .execute(Some(&admin), CreateTaskRequest::new("Write spec"))
        .await?;
    let id = saved_id(&created)?;
    let denied = complete.execute(Some(&guest), id).await;
    ensure!(matches!(denied, Err(TaskServiceError::Unauthorized(_))));

    let completed = complete.execute(Some(&admin), id).await?;
    ensure!(completed.status() == TaskStatus::Completed);

    let again = complete.execute(Some(&admin), id).await;
    ensure!(matches!(again, Err(TaskServiceError::InvalidState(_))));
    Ok(())
}

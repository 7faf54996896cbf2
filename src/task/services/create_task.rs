//! Use case for creating tasks.

use super::{TaskServiceError, TaskServiceResult};
use crate::authorization::{
    AuthorizationContext,
    domain::{Actor, AuthorizationError, Resource},
    policy::TaskPolicy,
    ports::SharedStrategy,
};
use crate::task::{
    domain::{NewTask, Task, TaskTitle},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Creates pending tasks on behalf of authorized actors.
pub struct CreateTask<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    authorization: AuthorizationContext,
}

impl<R, C> Clone for CreateTask<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            authorization: self.authorization.clone(),
        }
    }
}

impl<R, C> CreateTask<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case with an explicit authorization context.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        authorization: AuthorizationContext,
    ) -> Self {
        Self {
            repository,
            clock,
            authorization,
        }
    }

    /// Creates the use case applying the policy's `create` strategy.
    #[must_use]
    pub fn from_policy(repository: Arc<R>, clock: Arc<C>, policy: &TaskPolicy) -> Self
    where
        C: 'static,
    {
        let authorization = policy.create_context(&clock);
        Self::new(repository, clock, authorization)
    }

    /// Returns the authorization context applied by [`Self::execute`].
    #[must_use]
    pub const fn authorization(&self) -> &AuthorizationContext {
        &self.authorization
    }

    /// Replaces the strategy applied by later [`Self::execute`] calls.
    pub fn set_strategy(&mut self, strategy: SharedStrategy) {
        self.authorization.set_strategy(strategy);
    }

    /// Creates a task using this use case's authorization context.
    ///
    /// # Errors
    ///
    /// See [`Self::execute_with`].
    pub async fn execute(
        &self,
        actor: Option<&Actor>,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.execute_with(&self.authorization, actor, request).await
    }

    /// Creates a task, authorizing against `authorization`.
    ///
    /// The title is validated first, then the actor is authorized against
    /// the task collection. Nothing is persisted unless both pass.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty or overlong
    /// title, [`TaskServiceError::Unauthorized`] when the strategy denies
    /// the actor, and [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn execute_with(
        &self,
        authorization: &AuthorizationContext,
        actor: Option<&Actor>,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;

        authorization
            .require(actor, Some(&Resource::TaskCollection))
            .inspect_err(|_| {
                warn!(actor = ?actor.map(Actor::id), action = "create", "task creation denied");
            })?;
        // A task needs an owner even if a permissive strategy admits an
        // anonymous caller.
        let creator = actor.ok_or(TaskServiceError::Unauthorized(
            AuthorizationError::Unauthorized,
        ))?;

        let task = Task::new(
            NewTask {
                title,
                description: request.description,
                created_by: creator.id(),
            },
            &*self.clock,
        );
        let saved = self.repository.save(task).await?;
        info!(
            task_id = ?saved.id(),
            actor = %creator.id(),
            "task created"
        );
        Ok(saved)
    }
}

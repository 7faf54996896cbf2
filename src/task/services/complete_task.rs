//! Use case for completing tasks.

use super::TaskServiceResult;
use crate::authorization::{
    AuthorizationContext,
    domain::{Actor, Resource},
    policy::TaskPolicy,
    ports::SharedStrategy,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Completes stored tasks on behalf of authorized actors.
pub struct CompleteTask<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    authorization: AuthorizationContext,
}

impl<R, C> Clone for CompleteTask<R, C>
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

impl<R, C> CompleteTask<R, C>
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

    /// Creates the use case applying the policy's `complete` strategy.
    #[must_use]
    pub fn from_policy(repository: Arc<R>, clock: Arc<C>, policy: &TaskPolicy) -> Self
    where
        C: 'static,
    {
        let authorization = policy.complete_context(&clock);
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

    /// Completes a task using this use case's authorization context.
    ///
    /// # Errors
    ///
    /// See [`Self::execute_with`].
    pub async fn execute(&self, actor: Option<&Actor>, task_id: TaskId) -> TaskServiceResult<Task> {
        self.execute_with(&self.authorization, actor, task_id).await
    }

    /// Completes a task, authorizing against `authorization`.
    ///
    /// The loaded task is the resource under authorization. A denied actor
    /// leaves the stored task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists for
    /// `task_id`, [`TaskServiceError::Unauthorized`] when the strategy
    /// denies the actor, [`TaskServiceError::InvalidState`] when the task is
    /// already completed, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    ///
    /// [`TaskServiceError::NotFound`]: super::TaskServiceError::NotFound
    /// [`TaskServiceError::Unauthorized`]: super::TaskServiceError::Unauthorized
    /// [`TaskServiceError::InvalidState`]: super::TaskServiceError::InvalidState
    /// [`TaskServiceError::Repository`]: super::TaskServiceError::Repository
    pub async fn execute_with(
        &self,
        authorization: &AuthorizationContext,
        actor: Option<&Actor>,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        let mut task = self.repository.find(task_id).await?;

        authorization
            .require(actor, Some(&Resource::Task(&task)))
            .inspect_err(|_| {
                warn!(
                    actor = ?actor.map(Actor::id),
                    action = "complete",
                    task_id = %task_id,
                    "task completion denied"
                );
            })?;

        task.mark_complete(&*self.clock)?;
        let saved = self.repository.save(task).await?;
        info!(
            task_id = %task_id,
            actor = ?actor.map(Actor::id),
            "task completed"
        );
        Ok(saved)
    }
}

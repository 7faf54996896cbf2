//! Holder and applier of the active authorization strategy.

use crate::authorization::{
    domain::{Actor, AuthorizationError, Resource},
    ports::{AuthorizationStrategy, SharedStrategy},
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Applies one selected strategy per authorization check.
///
/// The context has no decision logic of its own. Reconfiguring it takes
/// `&mut self`, so a context shared across concurrent requests cannot be
/// swapped underneath them; each request scope owns or clones its own
/// context. Cloning copies the strategy handle, not the strategy.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use taskgate::authorization::AuthorizationContext;
/// use taskgate::authorization::domain::{Actor, ActorId, Resource};
/// use taskgate::authorization::strategies::{PermissionBasedStrategy, RoleBasedStrategy};
///
/// let actor = Actor::new(ActorId::new()).with_permissions(["tasks.create"]);
/// let mut context = AuthorizationContext::new(Arc::new(RoleBasedStrategy::new("admin")));
/// assert!(!context.check_authorization(Some(&actor), Some(&Resource::TaskCollection)));
///
/// context.set_strategy(Arc::new(PermissionBasedStrategy::new("tasks.create")));
/// assert!(context.check_authorization(Some(&actor), Some(&Resource::TaskCollection)));
/// ```
#[derive(Clone)]
pub struct AuthorizationContext {
    strategy: SharedStrategy,
}

impl AuthorizationContext {
    /// Creates a context applying `strategy`.
    #[must_use]
    pub fn new(strategy: SharedStrategy) -> Self {
        Self { strategy }
    }

    /// Creates a context from an owned strategy value.
    #[must_use]
    pub fn from_strategy(strategy: impl AuthorizationStrategy + 'static) -> Self {
        Self::new(Arc::new(strategy))
    }

    /// Replaces the active strategy for every later check on this context.
    pub fn set_strategy(&mut self, strategy: SharedStrategy) {
        self.strategy = strategy;
    }

    /// Returns the active strategy handle.
    #[must_use]
    pub const fn strategy(&self) -> &SharedStrategy {
        &self.strategy
    }

    /// Asks the active strategy whether `actor` may act on `resource`.
    #[must_use]
    pub fn check_authorization(
        &self,
        actor: Option<&Actor>,
        resource: Option<&Resource<'_>>,
    ) -> bool {
        let allowed = self.strategy.authorize(actor, resource);
        debug!(
            actor = ?actor.map(Actor::id),
            resource = resource.map_or("none", Resource::kind),
            allowed,
            "authorization decision"
        );
        allowed
    }

    /// Gate form of [`Self::check_authorization`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::Unauthorized`] when the active strategy
    /// denies the request.
    pub fn require(
        &self,
        actor: Option<&Actor>,
        resource: Option<&Resource<'_>>,
    ) -> Result<(), AuthorizationError> {
        if self.check_authorization(actor, resource) {
            Ok(())
        } else {
            Err(AuthorizationError::Unauthorized)
        }
    }
}

impl fmt::Debug for AuthorizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationContext").finish_non_exhaustive()
    }
}

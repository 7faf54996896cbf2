//! Role-based authorization.

use crate::authorization::{
    domain::{Actor, Resource, Role},
    ports::AuthorizationStrategy,
};

/// Grants access when the actor holds one designated role.
///
/// # Examples
///
/// ```
/// use taskgate::authorization::domain::{Actor, ActorId, Resource};
/// use taskgate::authorization::ports::AuthorizationStrategy;
/// use taskgate::authorization::strategies::RoleBasedStrategy;
///
/// let strategy = RoleBasedStrategy::new("admin");
/// let admin = Actor::new(ActorId::new()).with_roles(["admin"]);
/// let guest = Actor::new(ActorId::new()).with_roles(["guest"]);
///
/// assert!(strategy.authorize(Some(&admin), Some(&Resource::TaskCollection)));
/// assert!(!strategy.authorize(Some(&guest), Some(&Resource::TaskCollection)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBasedStrategy {
    required_role: Role,
}

impl RoleBasedStrategy {
    /// Creates a strategy requiring `role`.
    #[must_use]
    pub fn new(role: impl Into<Role>) -> Self {
        Self {
            required_role: role.into(),
        }
    }

    /// Returns the role this strategy requires.
    #[must_use]
    pub const fn required_role(&self) -> &Role {
        &self.required_role
    }
}

impl AuthorizationStrategy for RoleBasedStrategy {
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        match (actor, resource) {
            (Some(actor), Some(_)) => actor.has_role(&self.required_role),
            _ => false,
        }
    }
}

//! Permission-based authorization.

use crate::authorization::{
    domain::{Actor, Permission, Resource},
    ports::AuthorizationStrategy,
};

/// Grants access when the actor holds one designated permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionBasedStrategy {
    required_permission: Permission,
}

impl PermissionBasedStrategy {
    /// Creates a strategy requiring `permission`.
    #[must_use]
    pub fn new(permission: impl Into<Permission>) -> Self {
        Self {
            required_permission: permission.into(),
        }
    }

    /// Returns the permission this strategy requires.
    #[must_use]
    pub const fn required_permission(&self) -> &Permission {
        &self.required_permission
    }
}

impl AuthorizationStrategy for PermissionBasedStrategy {
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        match (actor, resource) {
            (Some(actor), Some(_)) => actor.has_permission(&self.required_permission),
            _ => false,
        }
    }
}

//! Attribute-based authorization on task ownership.

use crate::authorization::{
    domain::{Actor, Resource},
    ports::AuthorizationStrategy,
};

/// Grants access when the actor created the task being acted on.
///
/// The task collection has no owner, so creation is always denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OwnerStrategy;

impl OwnerStrategy {
    /// Creates an ownership strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AuthorizationStrategy for OwnerStrategy {
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        let Some(actor) = actor else {
            return false;
        };
        resource
            .and_then(Resource::task)
            .is_some_and(|task| task.created_by() == actor.id())
    }
}

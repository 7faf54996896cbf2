//! Fallback strategy.

use crate::authorization::{
    domain::{Actor, Resource},
    ports::AuthorizationStrategy,
};

/// Denies every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DenyAllStrategy;

impl AuthorizationStrategy for DenyAllStrategy {
    fn authorize(&self, _actor: Option<&Actor>, _resource: Option<&Resource<'_>>) -> bool {
        false
    }
}

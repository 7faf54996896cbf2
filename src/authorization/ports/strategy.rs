//! Strategy port for authorization decisions.

use crate::authorization::domain::{Actor, Resource};
use std::sync::Arc;

/// Shared, read-only handle to a strategy.
pub type SharedStrategy = Arc<dyn AuthorizationStrategy>;

/// A single, swappable authorization rule.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be pure: no I/O and no state beyond configuration fixed at construction
/// - Never panic for well-formed input
/// - Return `false` when `actor` or `resource` is absent
pub trait AuthorizationStrategy: Send + Sync {
    /// Decides whether `actor` may act on `resource`.
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool;
}

impl<S> AuthorizationStrategy for Arc<S>
where
    S: AuthorizationStrategy + ?Sized,
{
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        (**self).authorize(actor, resource)
    }
}

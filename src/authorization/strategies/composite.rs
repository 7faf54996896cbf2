//! Strategies combining other strategies.

use crate::authorization::{
    domain::{Actor, Resource},
    ports::{AuthorizationStrategy, SharedStrategy},
};

/// Grants access when every child strategy grants it.
///
/// An empty composite denies.
#[derive(Clone, Default)]
pub struct AllOfStrategy {
    strategies: Vec<SharedStrategy>,
}

impl AllOfStrategy {
    /// Creates a conjunction over `strategies`.
    #[must_use]
    pub fn new(strategies: impl IntoIterator<Item = SharedStrategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    /// Returns the number of child strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns `true` when there are no child strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl AuthorizationStrategy for AllOfStrategy {
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        !self.strategies.is_empty()
            && self
                .strategies
                .iter()
                .all(|strategy| strategy.authorize(actor, resource))
    }
}

/// Grants access when any child strategy grants it.
///
/// An empty composite denies.
#[derive(Clone, Default)]
pub struct AnyOfStrategy {
    strategies: Vec<SharedStrategy>,
}

impl AnyOfStrategy {
    /// Creates a disjunction over `strategies`.
    #[must_use]
    pub fn new(strategies: impl IntoIterator<Item = SharedStrategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    /// Returns the number of child strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns `true` when there are no child strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl AuthorizationStrategy for AnyOfStrategy {
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        self.strategies
            .iter()
            .any(|strategy| strategy.authorize(actor, resource))
    }
}

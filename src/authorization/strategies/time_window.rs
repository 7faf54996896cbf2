//! Time-of-day authorization.

use crate::authorization::{
    domain::{Actor, Resource},
    ports::AuthorizationStrategy,
};
use chrono::NaiveTime;
use mockable::Clock;
use std::sync::Arc;

/// Grants access only during a daily UTC window `[start, end)`.
///
/// A window whose `start` is after its `end` wraps past midnight. A window
/// with `start == end` is empty and denies everything. Combine with
/// [`AllOfStrategy`](super::AllOfStrategy) to restrict another rule to
/// business hours.
pub struct TimeWindowStrategy<C>
where
    C: Clock + Send + Sync,
{
    start: NaiveTime,
    end: NaiveTime,
    clock: Arc<C>,
}

impl<C> TimeWindowStrategy<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a strategy open from `start` (inclusive) to `end` (exclusive).
    #[must_use]
    pub const fn new(start: NaiveTime, end: NaiveTime, clock: Arc<C>) -> Self {
        Self { start, end, clock }
    }

    /// Returns `true` when `time` falls inside the window.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }
}

impl<C> AuthorizationStrategy for TimeWindowStrategy<C>
where
    C: Clock + Send + Sync,
{
    fn authorize(&self, actor: Option<&Actor>, resource: Option<&Resource<'_>>) -> bool {
        if actor.is_none() || resource.is_none() {
            return false;
        }
        self.contains(self.clock.utc().time())
    }
}

//! Port contracts for authorization.
//!
//! Ports define the decision-rule interface consumed by the authorization
//! context.

pub mod strategy;

pub use strategy::{AuthorizationStrategy, SharedStrategy};

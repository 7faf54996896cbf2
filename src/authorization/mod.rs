//! Pluggable authorization decisions for task use cases.
//!
//! The decision rule answering "may this actor act on this resource" is an
//! [`ports::AuthorizationStrategy`]. Use cases never name a concrete rule;
//! they consult an [`AuthorizationContext`], which applies whichever strategy
//! is currently selected. Adding a new rule means adding a new strategy type,
//! with no change to the context or the use cases.
//!
//! - Domain types in [`domain`]
//! - The strategy contract in [`ports`]
//! - Built-in rules in [`strategies`]
//! - Serialized rule selection in [`policy`]

mod context;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod strategies;

pub use context::AuthorizationContext;

//! Task lifecycle management.
//!
//! Tasks are created pending and later completed. Both operations run
//! through use cases that consult an authorization context before touching
//! the entity or the repository. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

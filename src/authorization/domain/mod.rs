//! Domain model for authorization decisions.
//!
//! Actors arrive from an authentication layer outside this crate and are
//! read-only here. Resources describe what the actor is trying to act on.

mod actor;
mod error;
mod resource;

pub use actor::{Actor, ActorId, Permission, Role};
pub use error::AuthorizationError;
pub use resource::Resource;

//! Error type for rejected authorization checks.

use thiserror::Error;

/// Returned when the active strategy denies an operation.
///
/// The message is fixed: callers learn that access was denied, never which
/// rule denied it or why.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The active strategy denied the actor.
    #[error("actor is not authorized to perform this operation")]
    Unauthorized,
}

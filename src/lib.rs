//! Taskgate: task use cases behind a pluggable authorization gate.
//!
//! This crate provides a small task lifecycle (create, complete) whose use
//! cases ask a swappable authorization strategy before mutating anything.
//!
//! # Architecture
//!
//! Taskgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`authorization`]: Actors, strategies, and the authorization context
//! - [`task`]: Task entity, repository port, adapters, and use cases

pub mod authorization;
pub mod task;

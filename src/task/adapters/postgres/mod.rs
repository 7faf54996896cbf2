//! `PostgreSQL` adapters for task lifecycle persistence.
//!
//! The table is created by `migrations/2026-01-01-000000_create_tasks`.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};

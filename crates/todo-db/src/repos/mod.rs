//! Repository modules implementing CRUD operations.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod task;

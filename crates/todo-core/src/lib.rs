//! # todo-core
//!
//! Core types shared across the todo tracker crates:
//! - The `Task` entity and its validated insert payload `NewTask`
//! - Outcome values for mutations that can miss their target row
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod outcomes;

//! Entity structs for the todo tracker.
//!
//! `Task` maps to the `tasks` table in the libSQL database.

mod task;

pub use task::{DEFAULT_STATUS, NewTask, Task};

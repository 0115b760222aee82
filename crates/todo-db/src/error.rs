//! Database error types for todo-db.

use thiserror::Error;

use todo_core::errors::CoreError;

/// Errors from storage and repository operations.
///
/// `Connection` and `Schema` only occur while opening the handle and are
/// fatal to the process. Everything else is recoverable per operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database could not be opened or connected to.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The `tasks` table could not be ensured.
    #[error("Schema initialization failed: {0}")]
    Schema(String),

    /// A statement could not be executed or committed.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] libsql::Error),

    /// Input rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,
}

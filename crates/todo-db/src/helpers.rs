//! Row-to-entity parsing helpers.

use todo_core::entities::Task;

use crate::error::DatabaseError;

/// Column list shared by every statement that yields a `Task`.
pub const TASK_COLS: &str = "id, title, description, status";

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert a row selected with [`TASK_COLS`] into a `Task`.
///
/// A NULL status (possible only for rows written outside this crate) reads
/// back as an empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or has the wrong type.
pub fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        status: row.get::<Option<String>>(3)?.unwrap_or_default(),
    })
}

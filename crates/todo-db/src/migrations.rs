//! Schema initializer.
//!
//! Embeds the SQL at compile time and executes it on every open. All
//! statements use `IF NOT EXISTS`, so re-running is harmless.

use crate::TodoDb;
use crate::error::DatabaseError;

/// The `tasks` table.
const MIGRATION_001: &str = include_str!("../migrations/001_tasks.sql");

impl TodoDb {
    /// Ensure the `tasks` table exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Schema` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Schema(format!("001_tasks: {e}")))?;
        tracing::debug!("schema ensured");
        Ok(())
    }
}

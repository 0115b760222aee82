//! Service layer hosting the task repository.
//!
//! `TaskService` owns the `TodoDb` storage handle it is given. Repository
//! methods are implemented as `impl TaskService` blocks under `repos/`.

use todo_config::DatabaseConfig;

use crate::TodoDb;
use crate::error::DatabaseError;

pub struct TaskService {
    db: TodoDb,
}

impl TaskService {
    /// Open the configured database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Connection` or `DatabaseError::Schema` if the
    /// storage handle cannot be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(TodoDb::open(config).await?))
    }

    /// Wrap an already-open storage handle.
    #[must_use]
    pub const fn from_db(db: TodoDb) -> Self {
        Self { db }
    }

    /// Access the underlying storage handle.
    #[must_use]
    pub const fn db(&self) -> &TodoDb {
        &self.db
    }

    /// Close the storage handle.
    pub fn close(self) {
        self.db.close();
    }
}

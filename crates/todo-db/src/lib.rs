//! # todo-db
//!
//! libSQL storage for the todo tracker.
//!
//! [`TodoDb`] is the storage handle: it owns the single connection the process
//! uses and ensures the schema on open. [`service::TaskService`] wraps a handle
//! and hosts the task repository methods.
//!
//! Uses the `libsql` crate, so the same code serves a local `SQLite` file and a
//! remote libSQL server (Turso or `sqld`).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;
use todo_config::{DatabaseConfig, DatabaseTarget};

/// Storage handle owning one libSQL database and connection.
///
/// Dropping the handle releases the connection, so every exit path frees it.
/// [`TodoDb::close`] does the same explicitly and logs it.
pub struct TodoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl TodoDb {
    /// Open the database described by `config` and ensure the schema.
    ///
    /// There is no retry: a failure here is fatal to the caller.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Connection` if the configuration is invalid or
    /// the database cannot be reached, and `DatabaseError::Schema` if the
    /// `tasks` table cannot be created.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let target = config
            .target()
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        match target {
            DatabaseTarget::Local(path) => Self::open_local(&path).await,
            DatabaseTarget::Remote { url, auth_token } => {
                Self::open_remote(&url, &auth_token).await
            }
        }
    }

    /// Open a local database file, or an in-memory one for `":memory:"`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or the schema
    /// cannot be ensured.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let parent = Path::new(path)
            .parent()
            .filter(|p| path != ":memory:" && !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Connection(format!("create {}: {e}", parent.display()))
            })?;
        }

        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Connection(format!("open {path}: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Connection(format!("connect {path}: {e}")))?;

        tracing::debug!(path, "opened local database");
        let todo_db = Self {
            db,
            conn,
            remote: false,
        };
        todo_db.ensure_schema().await?;
        Ok(todo_db)
    }

    /// Connect to a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the server cannot be reached or the schema
    /// cannot be ensured.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await
            .map_err(|e| DatabaseError::Connection(format!("open {url}: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Connection(format!("connect {url}: {e}")))?;

        tracing::debug!(url, "connected to remote database");
        let todo_db = Self {
            db,
            conn,
            remote: true,
        };
        todo_db.ensure_schema().await?;
        Ok(todo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote server.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Release the connection.
    pub fn close(self) {
        let remote = self.remote;
        drop(self);
        tracing::debug!(remote, "database connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> TodoDb {
        TodoDb::open_local(":memory:").await.unwrap()
    }

    async fn column_names(db: &TodoDb) -> Vec<String> {
        let mut rows = db
            .conn()
            .query("SELECT name FROM pragma_table_info('tasks') ORDER BY cid", ())
            .await
            .unwrap();
        let mut names = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            names.push(row.get::<String>(0).unwrap());
        }
        names
    }

    #[tokio::test]
    async fn open_local_creates_tasks_table() {
        let db = test_db().await;
        assert_eq!(
            column_names(&db).await,
            ["id", "title", "description", "status"]
        );
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let db = test_db().await;
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
        assert_eq!(column_names(&db).await.len(), 4);
    }

    #[tokio::test]
    async fn status_defaults_to_pending() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO tasks (title) VALUES ('raw insert')", ())
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT status FROM tasks WHERE title = 'raw insert'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "pending");
    }

    #[tokio::test]
    async fn title_is_not_null() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute("INSERT INTO tasks (description) VALUES ('no title')", ())
            .await;
        assert!(result.is_err(), "NULL title should be rejected");
    }

    #[tokio::test]
    async fn open_with_memory_config() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        let db = TodoDb::open(&config).await.unwrap();
        assert!(!db.is_remote());
        db.close();
    }

    #[tokio::test]
    async fn open_rejects_invalid_url() {
        let config = DatabaseConfig {
            url: "mysql://localhost/todo".into(),
            ..Default::default()
        };
        let err = TodoDb::open(&config).await.err().unwrap();
        assert!(matches!(err, DatabaseError::Connection(_)));
    }
}

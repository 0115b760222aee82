//! Task repository: add, list, get, update, delete.
//!
//! Every method is a single bound-parameter statement, so each one commits
//! atomically on its own and no caller ever needs a transaction.

use todo_core::entities::{NewTask, Task};
use todo_core::outcomes::{DeleteOutcome, UpdateOutcome};

use crate::error::DatabaseError;
use crate::helpers::{TASK_COLS, row_to_task};
use crate::service::TaskService;

impl TaskService {
    /// Insert a task with the default status and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank title and
    /// `DatabaseError::Persistence` if the insert cannot be committed.
    pub async fn add_task(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, DatabaseError> {
        let new = NewTask::new(title, description)?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO tasks (title, description) VALUES (?1, ?2) RETURNING {TASK_COLS}"
                ),
                libsql::params![new.title(), new.description()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let task = row_to_task(&row)?;

        tracing::info!(task_id = task.id, "task added");
        Ok(task)
    }

    /// All tasks, oldest first. An empty vector means the table has no rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Persistence` if the query fails.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {TASK_COLS} FROM tasks ORDER BY id"), ())
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Fetch one task by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no row has this id.
    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {TASK_COLS} FROM tasks WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Overwrite title and description of an existing task. Status is left
    /// alone and a missing id never creates a row.
    ///
    /// A missing id is reported as `NotFound` even when the new title is blank.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank title on an existing
    /// task and `DatabaseError::Persistence` if the update cannot be committed.
    pub async fn update_task(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<UpdateOutcome, DatabaseError> {
        let new = match NewTask::new(title, description) {
            Ok(new) => new,
            Err(error) => {
                return match self.get_task(id).await {
                    Ok(_) => Err(error.into()),
                    Err(DatabaseError::NoResult) => Ok(UpdateOutcome::NotFound),
                    Err(other) => Err(other),
                };
            }
        };

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET title = ?1, description = ?2 WHERE id = ?3",
                libsql::params![new.title(), new.description(), id],
            )
            .await?;

        let outcome = UpdateOutcome::from_rows_affected(affected);
        tracing::info!(task_id = id, %outcome, "task update");
        Ok(outcome)
    }

    /// Permanently remove a task.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Persistence` if the delete cannot be committed.
    pub async fn delete_task(&self, id: i64) -> Result<DeleteOutcome, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .await?;

        let outcome = DeleteOutcome::from_rows_affected(affected);
        tracing::info!(task_id = id, %outcome, "task delete");
        Ok(outcome)
    }
}

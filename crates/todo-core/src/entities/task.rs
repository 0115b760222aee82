use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Status the storage layer assigns to every new row.
pub const DEFAULT_STATUS: &str = "pending";

/// A single to-do record as stored in the `tasks` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

/// Validated payload for inserting or overwriting a task.
///
/// The title must contain something other than whitespace. Both fields are
/// kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
}

impl NewTask {
    /// Build a payload from raw user text.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is empty or whitespace.
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("task title must not be empty".into()));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.map(String::from),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

//! Non-error results of mutations that address a row by id.
//!
//! A missing row is a normal answer, not a failure: the caller reports it
//! and carries on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of overwriting a task's title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

impl UpdateOutcome {
    /// Map a statement's affected-row count to an outcome.
    #[must_use]
    pub const fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 { Self::NotFound } else { Self::Updated }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of removing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    /// Map a statement's affected-row count to an outcome.
    #[must_use]
    pub const fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 { Self::NotFound } else { Self::Deleted }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_is_not_found() {
        assert_eq!(UpdateOutcome::from_rows_affected(0), UpdateOutcome::NotFound);
        assert_eq!(DeleteOutcome::from_rows_affected(0), DeleteOutcome::NotFound);
    }

    #[test]
    fn any_rows_is_success() {
        assert_eq!(UpdateOutcome::from_rows_affected(1), UpdateOutcome::Updated);
        assert_eq!(DeleteOutcome::from_rows_affected(1), DeleteOutcome::Deleted);
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(UpdateOutcome::NotFound.to_string(), "not_found");
        assert_eq!(DeleteOutcome::Deleted.to_string(), "deleted");
    }
}

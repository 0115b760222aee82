//! Database connection target configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// URL schemes libSQL's remote client accepts.
const REMOTE_SCHEMES: &[&str] = &["libsql://", "http://", "https://", "ws://", "wss://"];

/// Default local database file: `<data_dir>/todo/tasks.db`.
fn default_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("todo").join("tasks.db"))
        .unwrap_or_else(|| PathBuf::from("tasks.db"))
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`. Ignored when `url` is set.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL server (e.g., `libsql://tasks-myorg.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote server.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

/// Where the storage handle should connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Local(String),
    Remote { url: String, auth_token: String },
}

impl DatabaseConfig {
    /// Whether a remote server URL is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// Resolve the connection target.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the URL has an unsupported
    /// scheme or the local path is empty.
    pub fn target(&self) -> Result<DatabaseTarget, ConfigError> {
        if self.is_remote() {
            if !REMOTE_SCHEMES.iter().any(|s| self.url.starts_with(s)) {
                return Err(ConfigError::InvalidValue {
                    field: "database.url".into(),
                    reason: format!("unsupported scheme in '{}'", self.url),
                });
            }
            return Ok(DatabaseTarget::Remote {
                url: self.url.clone(),
                auth_token: self.auth_token.clone(),
            });
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(DatabaseTarget::Local(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_targets_local_file() {
        let config = DatabaseConfig::default();
        assert!(!config.is_remote());
        match config.target().unwrap() {
            DatabaseTarget::Local(path) => assert!(path.ends_with("tasks.db")),
            DatabaseTarget::Remote { .. } => panic!("default should be local"),
        }
    }

    #[test]
    fn url_selects_remote() {
        let config = DatabaseConfig {
            url: "libsql://tasks-myorg.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert_eq!(
            config.target().unwrap(),
            DatabaseTarget::Remote {
                url: "libsql://tasks-myorg.turso.io".into(),
                auth_token: "token123".into(),
            }
        );
    }

    #[test]
    fn rejects_unknown_scheme() {
        let config = DatabaseConfig {
            url: "mysql://localhost/todo".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.target(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "database.url"
        ));
    }

    #[test]
    fn rejects_empty_path() {
        let config = DatabaseConfig {
            path: "  ".into(),
            ..Default::default()
        };
        assert!(config.target().is_err());
    }
}

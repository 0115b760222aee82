//! # todo-config
//!
//! Layered configuration loading for the todo tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TODO_*` prefix, `__` as separator)
//! 2. Project-level `.todo/config.toml`
//! 3. User-level `~/.config/todo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TODO_DATABASE__PATH` -> `database.path`,
//! `TODO_DATABASE__URL` -> `database.url`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use todo_config::TodoConfig;
//!
//! let config = TodoConfig::load_with_dotenv().expect("config");
//! println!("remote: {}", config.database.is_remote());
//! ```

mod database;
mod error;

pub use database::{DatabaseConfig, DatabaseTarget};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl TodoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".todo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TODO_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todo").join("config.toml"))
    }
}

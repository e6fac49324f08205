//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve the storage slot key, database path and logging settings.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Resolution never fails; validation happens where values are used.

use crate::logging::default_log_level;
use crate::repo::todo_store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

/// Environment variable overriding the storage slot key.
pub const ENV_STORAGE_KEY: &str = "TODO_STORAGE_KEY";
/// Environment variable overriding the SQLite database path.
pub const ENV_DB_PATH: &str = "TODO_DB_PATH";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";
/// Environment variable enabling file logging into a directory.
pub const ENV_LOG_DIR: &str = "TODO_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "todo.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        let defaults = Self::default();
        Self {
            storage_key: value(ENV_STORAGE_KEY).unwrap_or(defaults.storage_key),
            db_path: value(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_STORAGE_KEY};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn from_lookup_uses_defaults_for_missing_and_blank_values() {
        let vars = HashMap::from([(ENV_STORAGE_KEY, "   ")]);
        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "todos-jquery");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn from_lookup_applies_trimmed_overrides() {
        let vars = HashMap::from([
            (ENV_STORAGE_KEY, " my-list "),
            (ENV_DB_PATH, "/var/lib/todo/list.sqlite3"),
            (ENV_LOG_DIR, "/var/log/todo"),
        ]);
        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.storage_key, "my-list");
        assert_eq!(config.db_path, PathBuf::from("/var/lib/todo/list.sqlite3"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/todo")));
    }
}

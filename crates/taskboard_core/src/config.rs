//! Runtime configuration resolved from the environment.

use crate::logging::default_log_level;
use std::path::PathBuf;

const DB_PATH_VAR: &str = "TASKBOARD_DB_PATH";
const LOG_LEVEL_VAR: &str = "TASKBOARD_LOG_LEVEL";
const LOG_DIR_VAR: &str = "TASKBOARD_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "taskboard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardConfig {
    /// Board database file.
    pub db_path: PathBuf,
    /// Level passed to `init_logging`.
    pub log_level: String,
    /// Log directory; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl TaskBoardConfig {
    /// Reads `TASKBOARD_DB_PATH`, `TASKBOARD_LOG_LEVEL` and `TASKBOARD_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskBoardConfig;
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let vars = HashMap::from([("TASKBOARD_DB_PATH", "  "), ("TASKBOARD_LOG_DIR", "")]);
        let config = TaskBoardConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.db_path, std::env::temp_dir().join("taskboard.sqlite3"));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let vars = HashMap::from([
            ("TASKBOARD_DB_PATH", " /var/lib/board.db "),
            ("TASKBOARD_LOG_LEVEL", "warn"),
            ("TASKBOARD_LOG_DIR", "/var/log/board"),
        ]);
        let config = TaskBoardConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/var/lib/board.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/board")));
    }
}

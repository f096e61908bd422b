//! Core of the task board.
//! Owns task persistence, board derivation and the column projection; UI
//! layers call into it and render what it returns.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod storage;
pub mod view;

pub use config::TaskBoardConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::preferences::Theme;
pub use model::task::{NewTask, Task, TaskId, TaskPatch, TaskStatus, TaskValidationError};
pub use repo::settings_repo::{KvSettingsRepository, SettingsRepository};
pub use repo::task_repo::{KvTaskRepository, RepoError, RepoResult, TaskRepository};
pub use seed::default_seed;
pub use service::board_service::{list_boards, resolve_active_board, BoardService};
pub use service::preference_service::PreferenceService;
pub use service::session::{BoardSession, BoardSnapshot, ColumnSnapshot};
pub use service::task_service::TaskService;
pub use storage::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError};
pub use view::projection::{project_columns, BoardProjection, ColumnView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

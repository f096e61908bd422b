//! Board session: the state a board UI works against.
//!
//! # Responsibility
//! - Hold the active board as explicit session state instead of a global.
//! - Expose one request/response call per UI action (select board, open,
//!   create, save, move, delete, sidebar and theme toggles).
//! - Produce owned snapshots a renderer can draw without touching storage.
//!
//! # Invariants
//! - After every mutation the active board is re-resolved, so removing the
//!   last task of a board falls back to the next board (or none).
//! - The persisted `activeBoard` is only written by [`BoardSession::select_board`].

use crate::model::preferences::Theme;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch, TaskStatus};
use crate::repo::settings_repo::KvSettingsRepository;
use crate::repo::task_repo::{KvTaskRepository, RepoError, RepoResult};
use crate::service::board_service::{list_boards, BoardService};
use crate::service::preference_service::PreferenceService;
use crate::service::task_service::TaskService;
use crate::storage::KeyValueStore;
use crate::view::projection::project_columns;
use log::info;

/// Owned column for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub boards: Vec<String>,
    pub active_board: Option<String>,
    pub columns: Vec<ColumnSnapshot>,
    pub sidebar_visible: bool,
    pub theme: Theme,
}

pub struct BoardSession<'store, S: KeyValueStore> {
    tasks: TaskService<KvTaskRepository<'store, S>, KvSettingsRepository<'store, S>>,
    boards: BoardService<KvSettingsRepository<'store, S>>,
    preferences: PreferenceService<KvSettingsRepository<'store, S>>,
    active_board: Option<String>,
}

impl<'store, S: KeyValueStore> BoardSession<'store, S> {
    /// Seeds `store` on first run and resolves the active board.
    pub fn open(store: &'store S, seed: &[Task]) -> RepoResult<Self> {
        let mut session = Self {
            tasks: TaskService::from_store(store),
            boards: BoardService::new(KvSettingsRepository::new(store)),
            preferences: PreferenceService::new(KvSettingsRepository::new(store)),
            active_board: None,
        };
        session.tasks.initialize(seed)?;
        session.refresh()?;
        info!(
            "event=session_open module=session status=ok has_active_board={}",
            session.active_board.is_some()
        );
        Ok(session)
    }

    pub fn active_board(&self) -> Option<&str> {
        self.active_board.as_deref()
    }

    /// Re-reads tasks and re-resolves the active board.
    pub fn refresh(&mut self) -> RepoResult<()> {
        let tasks = self.tasks.get_tasks()?;
        self.active_board = self.boards.get_active_board(&tasks)?;
        Ok(())
    }

    pub fn snapshot(&self) -> RepoResult<BoardSnapshot> {
        let tasks = self.tasks.get_tasks()?;
        let active = self.active_board.as_deref().unwrap_or_default();
        let columns = project_columns(&tasks, active, &TaskStatus::ALL)
            .into_columns()
            .into_iter()
            .map(|column| ColumnSnapshot {
                status: column.status,
                tasks: column.tasks.into_iter().cloned().collect(),
            })
            .collect();

        Ok(BoardSnapshot {
            boards: list_boards(&tasks),
            active_board: self.active_board.clone(),
            columns,
            sidebar_visible: self.preferences.sidebar_visible()?,
            theme: self.preferences.theme()?,
        })
    }

    /// Board button click.
    pub fn select_board(&mut self, name: &str) -> RepoResult<()> {
        self.boards.set_active_board(name)?;
        self.refresh()
    }

    /// Task click: loads the task for the detail view.
    pub fn open_task(&self, id: TaskId) -> RepoResult<Task> {
        self.tasks.get_task(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Create-task submit. The task lands on the active board; with no
    /// active board it is created without one.
    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        status: &str,
    ) -> RepoResult<Task> {
        let board = self.active_board.clone().unwrap_or_default();
        let input = NewTask::new(title, status, board).with_description(description);
        let task = self.tasks.create_task(&input)?;
        self.refresh()?;
        Ok(task)
    }

    /// Edit-save submit: replaces title, description and status.
    pub fn save_task_changes(
        &mut self,
        id: TaskId,
        title: &str,
        description: &str,
        status: &str,
    ) -> RepoResult<Task> {
        let patch = TaskPatch {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            status: Some(status.to_string()),
            board: None,
        };
        let task = self.tasks.update_task(id, &patch)?;
        self.refresh()?;
        Ok(task)
    }

    /// Moves a task to another column without touching other fields.
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> RepoResult<Task> {
        let task = self
            .tasks
            .update_task(id, &TaskPatch::status(status.as_str()))?;
        self.refresh()?;
        Ok(task)
    }

    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.tasks.delete_task(id)?;
        self.refresh()
    }

    pub fn set_sidebar_visible(&self, visible: bool) -> RepoResult<()> {
        self.preferences.set_sidebar_visible(visible)
    }

    pub fn toggle_theme(&self) -> RepoResult<Theme> {
        self.preferences.toggle_theme()
    }
}

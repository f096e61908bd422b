//! Board index: derived board list and the persisted active selection.

use crate::model::task::Task;
use crate::repo::settings_repo::SettingsRepository;
use crate::repo::task_repo::RepoResult;
use std::collections::HashSet;

/// Distinct non-empty board names in first-seen order.
pub fn list_boards(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    tasks
        .iter()
        .map(|task| task.board.as_str())
        .filter(|board| !board.is_empty() && seen.insert(*board))
        .map(str::to_string)
        .collect()
}

/// Picks the board to display.
///
/// The persisted choice wins while it still names a board; otherwise the
/// first board is used. `None` means there is no board to show.
pub fn resolve_active_board(persisted: Option<&str>, boards: &[String]) -> Option<String> {
    persisted
        .and_then(|name| boards.iter().find(|board| board.as_str() == name))
        .or_else(|| boards.first())
        .cloned()
}

pub struct BoardService<P: SettingsRepository> {
    settings: P,
}

impl<P: SettingsRepository> BoardService<P> {
    pub fn new(settings: P) -> Self {
        Self { settings }
    }

    /// Active board for the given task collection.
    pub fn get_active_board(&self, tasks: &[Task]) -> RepoResult<Option<String>> {
        let persisted = self.settings.active_board()?;
        Ok(resolve_active_board(persisted.as_deref(), &list_boards(tasks)))
    }

    /// Persists `name` as the selection. It may name a board that does not
    /// exist (yet); [`Self::get_active_board`] falls back in that case.
    pub fn set_active_board(&self, name: &str) -> RepoResult<()> {
        self.settings.set_active_board(name)
    }
}

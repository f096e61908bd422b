//! Column projection for the active board.
//!
//! # Invariants
//! - Output has exactly one column per distinct requested status, in the
//!   requested order, even when the column is empty.
//! - Within a column, tasks keep their order from the input collection.
//! - No I/O: identical input always yields identical output.

use crate::model::task::{Task, TaskStatus};

/// One rendered column: a status and the tasks in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// Columns of one board, borrowed from the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjection<'a> {
    columns: Vec<ColumnView<'a>>,
}

impl<'a> BoardProjection<'a> {
    pub fn columns(&self) -> &[ColumnView<'a>] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView<'a>> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Tasks under `status`; empty when the status was not requested.
    pub fn tasks_in(&self, status: TaskStatus) -> &[&'a Task] {
        match self.column(status) {
            Some(column) => &column.tasks,
            None => &[],
        }
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    pub fn into_columns(self) -> Vec<ColumnView<'a>> {
        self.columns
    }
}

/// Groups the tasks of `active_board` by status.
///
/// Duplicate entries in `statuses` collapse onto their first occurrence. An
/// empty `active_board` matches nothing, since tasks without a board are on
/// no board.
pub fn project_columns<'a>(
    tasks: &'a [Task],
    active_board: &str,
    statuses: &[TaskStatus],
) -> BoardProjection<'a> {
    let mut columns: Vec<ColumnView<'a>> = Vec::with_capacity(statuses.len());
    for &status in statuses {
        if columns.iter().all(|column| column.status != status) {
            columns.push(ColumnView {
                status,
                tasks: Vec::new(),
            });
        }
    }

    for task in tasks.iter().filter(|task| task.is_on_board(active_board)) {
        if let Some(column) = columns.iter_mut().find(|column| column.status == task.status) {
            column.tasks.push(task);
        }
    }

    BoardProjection { columns }
}

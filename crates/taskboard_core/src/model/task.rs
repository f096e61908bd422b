//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its status column.
//! - Validate create/edit input coming from raw form values.
//!
//! # Invariants
//! - `id` is unique within a collection and never reissued.
//! - `title` is never empty or whitespace-only once persisted.
//! - `status` is always one of [`TaskStatus::ALL`].
//! - An empty `board` means the task belongs to no board.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable task identifier, serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the following id, or `None` when the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    /// Every column, in display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(TaskValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Rejected task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    UnknownStatus(String),
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::UnknownStatus(value) => {
                write!(f, "unknown task status `{value}`; expected todo|doing|done")
            }
            Self::DuplicateId(id) => write!(f, "duplicate task id {id}"),
        }
    }
}

impl Error for TaskValidationError {}

/// Persisted task record.
///
/// `description` and `board` default to empty text so hand-written seed
/// data may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub board: String,
}

impl Task {
    /// Checks the invariants that the type system does not already hold.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)
    }

    /// Whether this task is shown when `board` is the active board.
    pub fn is_on_board(&self, board: &str) -> bool {
        !self.board.is_empty() && self.board == board
    }
}

/// Create-task form values before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// Raw status text as submitted; parsed into [`TaskStatus`] on create.
    pub status: String,
    pub board: String,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        board: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: status.into(),
            board: board.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validates the input and builds the record under `id`.
    pub fn into_task(self, id: TaskId) -> Result<Task, TaskValidationError> {
        validate_title(&self.title)?;
        let status = self.status.parse::<TaskStatus>()?;
        Ok(Task {
            id,
            title: self.title,
            description: self.description,
            status,
            board: self.board,
        })
    }
}

/// Partial edit of a task. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub board: Option<String>,
}

impl TaskPatch {
    /// Patch that only moves the task to another column.
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Returns `task` with the provided fields merged over it.
    ///
    /// Nothing is applied unless every provided field is valid.
    pub fn apply_to(&self, task: &Task) -> Result<Task, TaskValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        let status = match &self.status {
            Some(raw) => raw.parse::<TaskStatus>()?,
            None => task.status,
        };

        Ok(Task {
            id: task.id,
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| task.description.clone()),
            status,
            board: self.board.clone().unwrap_or_else(|| task.board.clone()),
        })
    }
}

/// Checks a whole collection: ids are unique and every task is valid.
pub fn validate_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(TaskValidationError::DuplicateId(task.id));
        }
        task.validate()?;
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

//! Task collection repository over a key-value store.
//!
//! # Responsibility
//! - Encode the whole task collection as one JSON entry under `tasks`.
//! - Allocate task ids from a persisted high-water mark.
//! - Run every mutation as one read-modify-write transaction.
//!
//! # Invariants
//! - Write paths validate input before anything is persisted.
//! - Read paths reject undecodable or inconsistent collections instead of
//!   masking them.
//! - A failed mutation leaves both `tasks` and `taskIdSeq` unchanged.

use crate::model::task::{
    validate_collection, NewTask, Task, TaskId, TaskPatch, TaskValidationError,
};
use crate::storage::{keys, KeyValueStore, StorageError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task and preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Storage(StorageError),
    NotFound(TaskId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted board data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Persistence contract for the task collection.
pub trait TaskRepository {
    /// Whether a task collection has ever been written.
    fn has_tasks(&self) -> RepoResult<bool>;
    /// Writes `seed` when no collection exists yet; returns whether it did.
    ///
    /// `on_seeded` runs inside the same transaction after the seed is
    /// written; its failure rolls the seed back.
    fn seed_if_absent(
        &self,
        seed: &[Task],
        on_seeded: impl FnOnce() -> RepoResult<()>,
    ) -> RepoResult<bool>;
    /// Full collection in persisted order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn create_task(&self, input: &NewTask) -> RepoResult<Task>;
    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task>;
    /// Removes one task. Unknown ids are `NotFound`.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// Task repository persisting through any [`KeyValueStore`].
pub struct KvTaskRepository<'store, S: KeyValueStore> {
    store: &'store S,
}

impl<'store, S: KeyValueStore> KvTaskRepository<'store, S> {
    pub fn new(store: &'store S) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.store.get(keys::TASKS)? else {
            return Ok(Vec::new());
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!("`{}` is not a task list: {err}", keys::TASKS))
        })?;
        validate_collection(&tasks)
            .map_err(|err| RepoError::InvalidData(format!("`{}`: {err}", keys::TASKS)))?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let encoded = encode(tasks)?;
        self.store.set(keys::TASKS, &encoded)?;
        Ok(())
    }

    fn last_issued_id(&self) -> RepoResult<Option<TaskId>> {
        match self.store.get(keys::TASK_ID_SEQ)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|err| {
                RepoError::InvalidData(format!("`{}` is not an id: {err}", keys::TASK_ID_SEQ))
            }),
            None => Ok(None),
        }
    }

    /// Picks an id above every id currently stored or ever issued.
    fn allocate_id(&self, tasks: &[Task]) -> RepoResult<TaskId> {
        let highest_stored = tasks.iter().map(|task| task.id).max();
        let high_water = highest_stored.max(self.last_issued_id()?);
        let id = match high_water {
            Some(id) => id
                .next()
                .ok_or_else(|| RepoError::InvalidData("task id space exhausted".to_string()))?,
            None => TaskId::new(1),
        };
        self.store.set(keys::TASK_ID_SEQ, &encode(&id)?)?;
        Ok(id)
    }

    /// Records `id` as issued so it is never handed out again.
    fn retire_id(&self, id: TaskId) -> RepoResult<()> {
        if self.last_issued_id()?.is_some_and(|issued| issued >= id) {
            return Ok(());
        }
        self.store.set(keys::TASK_ID_SEQ, &encode(&id)?)?;
        Ok(())
    }

    fn position_of(tasks: &[Task], id: TaskId) -> RepoResult<usize> {
        tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl<S: KeyValueStore> TaskRepository for KvTaskRepository<'_, S> {
    fn has_tasks(&self) -> RepoResult<bool> {
        Ok(self.store.get(keys::TASKS)?.is_some())
    }

    fn seed_if_absent(
        &self,
        seed: &[Task],
        on_seeded: impl FnOnce() -> RepoResult<()>,
    ) -> RepoResult<bool> {
        self.store.with_transaction(|| {
            if self.has_tasks()? {
                return Ok(false);
            }
            validate_collection(seed)?;
            self.save(seed)?;
            if let Some(highest) = seed.iter().map(|task| task.id).max() {
                self.retire_id(highest)?;
            }
            on_seeded()?;
            Ok(true)
        })
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.load()
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.load()?.into_iter().find(|task| task.id == id))
    }

    fn create_task(&self, input: &NewTask) -> RepoResult<Task> {
        let result: RepoResult<Task> = self.store.with_transaction(|| {
            let mut tasks = self.load()?;
            let id = self.allocate_id(&tasks)?;
            let task = input.clone().into_task(id)?;
            tasks.push(task.clone());
            self.save(&tasks)?;
            Ok(task)
        });

        match &result {
            Ok(task) => info!(
                "event=task_create module=repo status=ok task_id={} status_column={}",
                task.id, task.status
            ),
            Err(err) => error!("event=task_create module=repo status=error error={err}"),
        }
        result
    }

    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let result: RepoResult<Task> = self.store.with_transaction(|| {
            let mut tasks = self.load()?;
            let index = Self::position_of(&tasks, id)?;
            let updated = patch.apply_to(&tasks[index])?;
            tasks[index] = updated.clone();
            self.save(&tasks)?;
            Ok(updated)
        });

        match &result {
            Ok(task) => info!(
                "event=task_update module=repo status=ok task_id={id} status_column={}",
                task.status
            ),
            Err(err) => error!("event=task_update module=repo status=error task_id={id} error={err}"),
        }
        result
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let result: RepoResult<()> = self.store.with_transaction(|| {
            let mut tasks = self.load()?;
            let index = Self::position_of(&tasks, id)?;
            let removed = tasks.remove(index);
            self.save(&tasks)?;
            self.retire_id(removed.id)
        });

        match &result {
            Ok(()) => info!("event=task_delete module=repo status=ok task_id={id}"),
            Err(err) => error!("event=task_delete module=repo status=error task_id={id} error={err}"),
        }
        result
    }
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> RepoResult<String> {
    serde_json::to_string(value)
        .map_err(|err| RepoError::InvalidData(format!("failed to encode board data: {err}")))
}

//! Task store use-cases.
//!
//! # Responsibility
//! - Provide the create/read/update/delete entry points for callers.
//! - Seed default data on first run.
//!
//! # Invariants
//! - Never bypasses repository validation or transactions.
//! - `initialize` only writes when no task collection exists.

use crate::model::preferences::DEFAULT_SIDEBAR_VISIBLE;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::repo::settings_repo::{KvSettingsRepository, SettingsRepository};
use crate::repo::task_repo::{KvTaskRepository, RepoResult, TaskRepository};
use crate::storage::KeyValueStore;
use log::info;

/// Use-case wrapper around the task collection.
pub struct TaskService<R: TaskRepository, P: SettingsRepository> {
    tasks: R,
    settings: P,
}

impl<'store, S: KeyValueStore>
    TaskService<KvTaskRepository<'store, S>, KvSettingsRepository<'store, S>>
{
    /// Builds the service with key-value repositories sharing one store.
    pub fn from_store(store: &'store S) -> Self {
        Self::new(KvTaskRepository::new(store), KvSettingsRepository::new(store))
    }
}

impl<R: TaskRepository, P: SettingsRepository> TaskService<R, P> {
    pub fn new(tasks: R, settings: P) -> Self {
        Self { tasks, settings }
    }

    /// Writes `seed` and the default sidebar flag on first run.
    ///
    /// Both writes commit together. Returns `true` when seeding happened,
    /// `false` when data was already present (in which case nothing is
    /// written).
    pub fn initialize(&self, seed: &[Task]) -> RepoResult<bool> {
        let seeded = self.tasks.seed_if_absent(seed, || {
            self.settings.set_sidebar_visible(DEFAULT_SIDEBAR_VISIBLE)
        })?;
        if !seeded {
            info!("event=store_init module=service status=skipped reason=data_present");
            return Ok(false);
        }
        info!(
            "event=store_init module=service status=ok seeded_tasks={}",
            seed.len()
        );
        Ok(true)
    }

    pub fn get_tasks(&self) -> RepoResult<Vec<Task>> {
        self.tasks.list_tasks()
    }

    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.tasks.get_task(id)
    }

    /// Validates `input`, assigns a fresh id and appends the task.
    pub fn create_task(&self, input: &NewTask) -> RepoResult<Task> {
        self.tasks.create_task(input)
    }

    /// Merges `patch` over the stored task. Unknown ids are `NotFound`.
    pub fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        self.tasks.update_task(id, patch)
    }

    /// Removes the task. Unknown ids are `NotFound` and change nothing.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.tasks.delete_task(id)
    }
}

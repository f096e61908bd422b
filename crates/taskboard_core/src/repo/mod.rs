//! Repository layer over the key-value storage boundary.
//!
//! # Responsibility
//! - Own the persisted encodings of tasks and settings.
//! - Translate storage failures and bad persisted data into `RepoError`.
//!
//! # Invariants
//! - Only repositories touch storage keys; services never do.

pub mod settings_repo;
pub mod task_repo;

//! Board domain model.
//!
//! # Responsibility
//! - Define the task record, its column status and the create/edit inputs.
//! - Define presentation preferences stored alongside tasks.
//!
//! # Invariants
//! - Boards are never stored; they are derived from `Task::board`.

pub mod preferences;
pub mod task;

//! Board use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations a UI layer invokes.
//! - Keep callers independent of storage keys and encodings.

pub mod board_service;
pub mod preference_service;
pub mod session;
pub mod task_service;

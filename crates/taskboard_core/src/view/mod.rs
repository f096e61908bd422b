//! Pure read models computed from the task collection.

pub mod projection;

//! Default board content written on first run.

use crate::model::task::{Task, TaskId, TaskStatus};

const SEED: &[(u64, &str, &str, TaskStatus, &str)] = &[
    (1, "Launch Epic Career", "Create a killer resume", TaskStatus::Todo, "Launch Career"),
    (2, "Conquer React", "", TaskStatus::Todo, "Launch Career"),
    (3, "Understand Databases", "", TaskStatus::Todo, "Launch Career"),
    (4, "Crush Frameworks", "", TaskStatus::Todo, "Launch Career"),
    (5, "Master JavaScript", "Get comfortable with the fundamentals", TaskStatus::Doing, "Launch Career"),
    (6, "Never Give Up", "", TaskStatus::Doing, "Launch Career"),
    (7, "Explore ES6 Features", "Deep dive into modern syntax", TaskStatus::Done, "Launch Career"),
    (8, "Have fun", "", TaskStatus::Done, "Launch Career"),
    (9, "Plan the quarter", "Pick three outcomes", TaskStatus::Todo, "Roadmap"),
    (10, "Ship the board MVP", "", TaskStatus::Doing, "Roadmap"),
];

/// Seed dataset: two boards spread over every column.
pub fn default_seed() -> Vec<Task> {
    SEED.iter()
        .map(|&(id, title, description, status, board)| Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            status,
            board: board.to_string(),
        })
        .collect()
}

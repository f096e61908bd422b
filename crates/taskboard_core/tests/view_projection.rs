use taskboard_core::{project_columns, Task, TaskId, TaskStatus};

fn task(id: u64, status: TaskStatus, board: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: format!("task {id}"),
        description: String::new(),
        status,
        board: board.to_string(),
    }
}

#[test]
fn two_task_board_projects_into_three_columns() {
    let tasks = vec![
        task(1, TaskStatus::Todo, "X"),
        task(2, TaskStatus::Doing, "X"),
    ];
    let projection = project_columns(&tasks, "X", &TaskStatus::ALL);

    assert_eq!(projection.columns().len(), 3);
    assert_eq!(projection.tasks_in(TaskStatus::Todo), &[&tasks[0]]);
    assert_eq!(projection.tasks_in(TaskStatus::Doing), &[&tasks[1]]);
    assert!(projection.column(TaskStatus::Done).unwrap().tasks.is_empty());
}

#[test]
fn every_requested_status_appears_in_requested_order() {
    let tasks = vec![task(1, TaskStatus::Done, "X")];
    let statuses = [TaskStatus::Done, TaskStatus::Todo, TaskStatus::Done];
    let projection = project_columns(&tasks, "X", &statuses);

    let order = projection
        .columns()
        .iter()
        .map(|column| column.status)
        .collect::<Vec<_>>();
    assert_eq!(order, vec![TaskStatus::Done, TaskStatus::Todo]);
}

#[test]
fn union_of_columns_is_the_board_subsequence_in_order() {
    let tasks = vec![
        task(1, TaskStatus::Doing, "X"),
        task(2, TaskStatus::Todo, "Y"),
        task(3, TaskStatus::Todo, "X"),
        task(4, TaskStatus::Doing, "X"),
        task(5, TaskStatus::Done, ""),
        task(6, TaskStatus::Todo, "X"),
    ];
    let projection = project_columns(&tasks, "X", &TaskStatus::ALL);

    assert_eq!(
        projection
            .tasks_in(TaskStatus::Todo)
            .iter()
            .map(|task| task.id.get())
            .collect::<Vec<_>>(),
        vec![3, 6]
    );
    assert_eq!(
        projection
            .tasks_in(TaskStatus::Doing)
            .iter()
            .map(|task| task.id.get())
            .collect::<Vec<_>>(),
        vec![1, 4]
    );
    assert_eq!(projection.task_count(), 4);

    for status in TaskStatus::ALL {
        let column = projection
            .tasks_in(status)
            .iter()
            .map(|task| task.id)
            .collect::<Vec<_>>();
        let expected = tasks
            .iter()
            .filter(|task| task.board == "X" && task.status == status)
            .map(|task| task.id)
            .collect::<Vec<_>>();
        assert_eq!(column, expected, "column {status}");
    }
    assert_eq!(
        projection.task_count(),
        tasks.iter().filter(|task| task.board == "X").count()
    );
}

#[test]
fn statuses_outside_the_requested_set_are_dropped() {
    let tasks = vec![task(1, TaskStatus::Todo, "X"), task(2, TaskStatus::Done, "X")];
    let projection = project_columns(&tasks, "X", &[TaskStatus::Done]);

    assert_eq!(projection.task_count(), 1);
    assert!(projection.tasks_in(TaskStatus::Todo).is_empty());
    assert!(projection.column(TaskStatus::Todo).is_none());
}

#[test]
fn empty_active_board_matches_nothing() {
    let tasks = vec![task(1, TaskStatus::Todo, "")];
    let projection = project_columns(&tasks, "", &TaskStatus::ALL);

    assert_eq!(projection.columns().len(), 3);
    assert_eq!(projection.task_count(), 0);
}

#[test]
fn projection_is_deterministic() {
    let tasks = vec![
        task(1, TaskStatus::Todo, "X"),
        task(2, TaskStatus::Done, "X"),
    ];
    assert_eq!(
        project_columns(&tasks, "X", &TaskStatus::ALL),
        project_columns(&tasks, "X", &TaskStatus::ALL)
    );
}

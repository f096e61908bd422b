use taskboard_core::db::open_db;
use taskboard_core::storage::keys;
use taskboard_core::{
    default_seed, BoardSession, KeyValueStore, MemoryKeyValueStore, RepoError,
    SqliteKeyValueStore, Task, TaskId, TaskStatus, Theme,
};

fn task(id: u64, title: &str, status: TaskStatus, board: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: String::new(),
        status,
        board: board.to_string(),
    }
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title.as_str()).collect()
}

#[test]
fn first_open_seeds_and_shows_first_board() {
    let store = MemoryKeyValueStore::new();
    let session = BoardSession::open(&store, &default_seed()).unwrap();
    let snapshot = session.snapshot().unwrap();

    assert_eq!(snapshot.boards, vec!["Launch Career", "Roadmap"]);
    assert_eq!(snapshot.active_board.as_deref(), Some("Launch Career"));
    assert!(snapshot.sidebar_visible);
    assert_eq!(snapshot.theme, Theme::Dark);
    assert_eq!(
        snapshot
            .columns
            .iter()
            .map(|column| (column.status, column.tasks.len()))
            .collect::<Vec<_>>(),
        vec![
            (TaskStatus::Todo, 4),
            (TaskStatus::Doing, 2),
            (TaskStatus::Done, 2)
        ]
    );
}

#[test]
fn selecting_a_board_persists_and_survives_reopen() {
    let store = MemoryKeyValueStore::new();
    {
        let mut session = BoardSession::open(&store, &default_seed()).unwrap();
        session.select_board("Roadmap").unwrap();
        assert_eq!(session.active_board(), Some("Roadmap"));
    }

    let reopened = BoardSession::open(&store, &default_seed()).unwrap();
    assert_eq!(reopened.active_board(), Some("Roadmap"));
    let snapshot = reopened.snapshot().unwrap();
    assert_eq!(titles(&snapshot.columns[0].tasks), vec!["Plan the quarter"]);
    assert_eq!(titles(&snapshot.columns[1].tasks), vec!["Ship the board MVP"]);
    assert!(snapshot.columns[2].tasks.is_empty());
}

#[test]
fn created_task_lands_on_active_board() {
    let store = MemoryKeyValueStore::new();
    let seed = vec![
        task(1, "A", TaskStatus::Todo, "X"),
        task(2, "B", TaskStatus::Doing, "Y"),
    ];
    let mut session = BoardSession::open(&store, &seed).unwrap();
    session.select_board("Y").unwrap();

    let created = session.create_task("C", "notes", "done").unwrap();
    assert_eq!(created.board, "Y");
    assert_eq!(created.description, "notes");

    let snapshot = session.snapshot().unwrap();
    assert_eq!(titles(&snapshot.columns[2].tasks), vec!["C"]);
}

#[test]
fn invalid_create_surfaces_validation_error() {
    let store = MemoryKeyValueStore::new();
    let mut session = BoardSession::open(&store, &default_seed()).unwrap();

    let err = session.create_task("", "", "todo").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(session.snapshot().unwrap().columns[0].tasks.len(), 4);
}

#[test]
fn edit_move_and_delete_round_through_the_store() {
    let store = MemoryKeyValueStore::new();
    let seed = vec![
        task(1, "A", TaskStatus::Todo, "X"),
        task(2, "B", TaskStatus::Doing, "X"),
    ];
    let mut session = BoardSession::open(&store, &seed).unwrap();

    let opened = session.open_task(TaskId::new(1)).unwrap();
    assert_eq!(opened, seed[0]);

    let saved = session
        .save_task_changes(TaskId::new(1), "A2", "details", "doing")
        .unwrap();
    assert_eq!(saved.title, "A2");
    assert_eq!(saved.board, "X");

    let moved = session.move_task(TaskId::new(2), TaskStatus::Done).unwrap();
    assert_eq!(moved.title, "B");

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.columns[0].tasks.is_empty());
    assert_eq!(titles(&snapshot.columns[1].tasks), vec!["A2"]);
    assert_eq!(titles(&snapshot.columns[2].tasks), vec!["B"]);

    session.delete_task(TaskId::new(2)).unwrap();
    assert!(matches!(
        session.open_task(TaskId::new(2)).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn deleting_last_task_of_board_falls_back() {
    let store = MemoryKeyValueStore::new();
    let seed = vec![
        task(1, "A", TaskStatus::Todo, "X"),
        task(2, "B", TaskStatus::Todo, "Y"),
    ];
    let mut session = BoardSession::open(&store, &seed).unwrap();
    session.select_board("Y").unwrap();

    session.delete_task(TaskId::new(2)).unwrap();
    assert_eq!(session.active_board(), Some("X"));

    session.delete_task(TaskId::new(1)).unwrap();
    assert_eq!(session.active_board(), None);
    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.boards.is_empty());
    assert!(snapshot.columns.iter().all(|column| column.tasks.is_empty()));
}

#[test]
fn sidebar_and_theme_toggles_persist() {
    let store = MemoryKeyValueStore::new();
    let session = BoardSession::open(&store, &default_seed()).unwrap();

    session.set_sidebar_visible(false).unwrap();
    assert_eq!(session.toggle_theme().unwrap(), Theme::Light);

    assert_eq!(store.get(keys::SHOW_SIDEBAR).unwrap().as_deref(), Some("false"));
    assert_eq!(store.get(keys::LIGHT_THEME).unwrap().as_deref(), Some("enabled"));

    let snapshot = session.snapshot().unwrap();
    assert!(!snapshot.sidebar_visible);
    assert_eq!(snapshot.theme, Theme::Light);
    assert_eq!(session.toggle_theme().unwrap(), Theme::Dark);
}

#[test]
fn file_backed_session_keeps_state_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.sqlite3");

    let created_id = {
        let conn = open_db(&path).unwrap();
        let store = SqliteKeyValueStore::new(&conn);
        let mut session = BoardSession::open(&store, &default_seed()).unwrap();
        session.select_board("Roadmap").unwrap();
        session.create_task("Write release notes", "", "todo").unwrap().id
    };

    let conn = open_db(&path).unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let session = BoardSession::open(&store, &default_seed()).unwrap();
    assert_eq!(session.active_board(), Some("Roadmap"));

    let task = session.open_task(created_id).unwrap();
    assert_eq!(task.board, "Roadmap");
    assert_eq!(created_id, TaskId::new(11));
}

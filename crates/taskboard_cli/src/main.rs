//! Text renderer for the task board.
//!
//! # Responsibility
//! - Open the configured board database and print one board snapshot.
//! - Stay a thin consumer of `BoardSession` output; no board logic here.
//!
//! Usage: `taskboard [BOARD]`. Selecting a board persists the choice.

use std::error::Error;
use std::fmt::Write as _;
use std::process::ExitCode;
use taskboard_core::db::open_db;
use taskboard_core::{
    core_version, default_seed, init_logging, BoardSession, BoardSnapshot, SqliteKeyValueStore,
    TaskBoardConfig, Theme,
};

fn main() -> ExitCode {
    let config = TaskBoardConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("taskboard: logging disabled: {err}");
        }
    }

    let board = std::env::args().nth(1);
    match run(&config, board.as_deref()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("taskboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &TaskBoardConfig, board: Option<&str>) -> Result<String, Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let store = SqliteKeyValueStore::new(&conn);
    let mut session = BoardSession::open(&store, &default_seed())?;
    if let Some(board) = board {
        session.select_board(board)?;
    }
    Ok(render(&session.snapshot()?))
}

fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    let theme = match snapshot.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    let _ = writeln!(out, "taskboard {} ({theme} theme)", core_version());

    if snapshot.sidebar_visible {
        let _ = writeln!(out, "Boards:");
        for board in &snapshot.boards {
            let marker = if snapshot.active_board.as_ref() == Some(board) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(out, " {marker} {board}");
        }
    }

    let Some(active) = &snapshot.active_board else {
        let _ = writeln!(out, "No boards yet.");
        return out;
    };
    let _ = writeln!(out, "\n# {active}");
    for column in &snapshot.columns {
        let _ = writeln!(
            out,
            "\n{} ({})",
            column.status.as_str().to_uppercase(),
            column.tasks.len()
        );
        for task in &column.tasks {
            let _ = writeln!(out, "  [{}] {}", task.id, task.title);
        }
    }
    out
}

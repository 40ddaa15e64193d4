//! End-to-end tests for the prompt loop.

use std::io::{Cursor, Write};
use timeline_games::{EmptyCellStyle, GameConfig, Session};

fn run(config: GameConfig, script: &str) -> (Session, String) {
    let mut session = Session::new(config);
    let mut out = Vec::new();
    session
        .run(Cursor::new(script.to_string()), &mut out)
        .expect("session runs");
    (session, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_scripted_win() {
    let (session, out) = run(GameConfig::default(), "0\n4\n1\n3\n2\n");

    assert_eq!(session.engine().history().len(), 6);
    assert!(out.contains("[X]|[X]|[X]"));
    assert!(out.trim_end().ends_with("Go to move #5 at square 2"));
    assert!(out.contains("Winner: X"));
}

#[test]
fn test_time_travel_and_branch() {
    let (session, out) = run(GameConfig::default(), "0\n4\n1\njump 1\n8\n");

    let engine = session.engine();
    assert_eq!(engine.history().len(), 3);
    assert_eq!(engine.step_number(), 2);
    assert!(out.contains("Next player: X"));
}

#[test]
fn test_errors_do_not_end_session() {
    let (session, out) = run(GameConfig::default(), "jump 7\nfly\n9\n4\n");

    assert!(out.contains("History index 7 out of range (history has 1 entries)"));
    assert!(out.contains("Unknown command or cell: 'fly' (type 'help' for commands)"));
    assert!(out.contains("Cell index 9 out of range (must be 0-8)"));
    assert_eq!(session.engine().history().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run(GameConfig::default(), "4\nquit\n0\n");
    assert_eq!(session.engine().history().len(), 2);
}

#[test]
fn test_toggle_and_state_dump() {
    let (session, out) = run(GameConfig::default(), "4\ntoggle\nstate\n");

    assert!(!session.engine().is_ascending());
    assert!(out.contains("Order: Descending"));
    assert!(out.contains("\"is_ascending\": false"));
}

#[test]
fn test_config_file_controls_rendering() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "empty_cell = \"dot\"\nhighlight_winner = false").unwrap();

    let config = GameConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(*config.empty_cell(), EmptyCellStyle::Dot);

    let (_, out) = run(config, "0\n4\n1\n3\n2\n");
    assert!(out.contains(" X | X | X "));
    assert!(!out.contains("[X]"));
    assert!(out.contains(" O | O | . "));
}

#[test]
fn test_malformed_config_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "highlight_winner = \"sometimes\"").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

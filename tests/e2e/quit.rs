use crate::common::harness::EditorTestHarness;
use kite::config::Config;
use kite::keybindings::Key;

fn status_text(harness: &EditorTestHarness) -> String {
    harness.editor().state().status.text().to_string()
}

#[test]
fn test_quit_clean_buffer_immediately() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(harness.editor().should_quit());
}

#[test]
fn test_quit_dirty_buffer_needs_confirmation() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.type_text("unsaved").unwrap();

    for remaining in [3, 2, 1] {
        harness.send_key(Key::Ctrl('q')).unwrap();
        assert!(!harness.editor().should_quit());
        assert_eq!(
            status_text(&harness),
            format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                remaining
            )
        );
    }
    harness.assert_screen_contains("WARNING!!! File has unsaved changes.");

    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(harness.editor().should_quit());
}

#[test]
fn test_other_key_resets_quit_countdown() {
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.type_text("x").unwrap();

    harness.send_key(Key::Ctrl('q')).unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(status_text(&harness).contains("Ctrl-Q 2 more times"));

    harness.send_key(Key::Left).unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(status_text(&harness).contains("Ctrl-Q 3 more times"));
    assert!(!harness.editor().should_quit());
}

#[test]
fn test_quit_times_comes_from_config() {
    let config = Config {
        quit_times: 0,
        ..Config::default()
    };
    let mut harness = EditorTestHarness::with_config(80, 10, config).unwrap();
    harness.type_text("x").unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(harness.editor().should_quit());
}

#[test]
fn test_saving_clears_quit_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "").unwrap();

    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.open_file(&path).unwrap();
    harness.type_text("x").unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(!harness.editor().should_quit());

    harness.send_key(Key::Ctrl('s')).unwrap();
    harness.send_key(Key::Ctrl('q')).unwrap();
    assert!(harness.editor().should_quit());
}

use crate::common::fixtures::TestFixture;
use crate::common::harness::EditorTestHarness;
use kite::keybindings::Key;
use kite::prompt::PromptKind;
use vt100::Color;

const MATCH: Color = Color::Idx(4);

fn fg(harness: &EditorTestHarness, row: u16, col: u16) -> Color {
    harness
        .screen()
        .cell(row, col)
        .map(|cell| cell.fgcolor())
        .unwrap_or(Color::Default)
}

fn open(content: &str) -> (TestFixture, EditorTestHarness) {
    let fixture = TestFixture::new("words.txt", content).unwrap();
    let mut harness = EditorTestHarness::new(80, 10).unwrap();
    harness.open_file(&fixture.path).unwrap();
    (fixture, harness)
}

#[test]
fn test_search_prompt_opens() {
    let (_fixture, mut harness) = open("alpha\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    assert_eq!(harness.editor().prompt_kind(), Some(PromptKind::Search));
    assert_eq!(harness.message_bar(), "Search:  (Use ESC/Arrows/Enter)");
}

#[test]
fn test_incremental_search_moves_cursor_and_marks_match() {
    let (_fixture, mut harness) = open("alpha\nbeta\ngamma beta\n");
    harness.send_key(Key::Ctrl('f')).unwrap();

    harness.type_text("g").unwrap();
    assert_eq!(harness.cursor_position(), (0, 2));

    harness.send_key(Key::Backspace).unwrap();
    harness.type_text("beta").unwrap();
    assert_eq!(harness.cursor_position(), (0, 1));
    assert_eq!(harness.message_bar(), "Search: beta (Use ESC/Arrows/Enter)");

    // The match is shown on the first screen row
    assert_eq!(harness.screen_row(0), "beta");
    for col in 0..4 {
        assert_eq!(fg(&harness, 0, col), MATCH);
    }
}

#[test]
fn test_arrows_step_between_matches_and_wrap() {
    let (_fixture, mut harness) = open("alpha\nbeta\ngamma beta\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("beta").unwrap();
    assert_eq!(harness.cursor_position(), (0, 1));

    harness.send_key(Key::Down).unwrap();
    assert_eq!(harness.cursor_position(), (6, 2));

    harness.send_key(Key::Right).unwrap();
    assert_eq!(harness.cursor_position(), (0, 1));

    harness.send_key(Key::Up).unwrap();
    assert_eq!(harness.cursor_position(), (6, 2));

    harness.send_key(Key::Left).unwrap();
    assert_eq!(harness.cursor_position(), (0, 1));
}

#[test]
fn test_only_the_current_match_is_marked() {
    let (_fixture, mut harness) = open("beta\nbeta\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("beta").unwrap();
    assert_eq!(fg(&harness, 0, 0), MATCH);
    assert_eq!(fg(&harness, 1, 0), Color::Default);

    harness.send_key(Key::Down).unwrap();
    assert_eq!(harness.cursor_position(), (0, 1));
    harness.send_key(Key::Escape).unwrap();
    for row in 0..2 {
        assert_eq!(fg(&harness, row, 0), Color::Default);
    }
}

#[test]
fn test_enter_keeps_cursor_at_match() {
    let (_fixture, mut harness) = open("one\ntwo\nthree\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("ree").unwrap();
    harness.send_key(Key::Enter).unwrap();

    assert_eq!(harness.editor().prompt_kind(), None);
    assert_eq!(harness.cursor_position(), (2, 2));
    assert_eq!(harness.message_bar(), "");
    // The match row was scrolled to the top; its overlay is gone
    assert_eq!(harness.screen_row(0), "three");
    assert_eq!(fg(&harness, 0, 2), Color::Default);

    // Typing resumes at the match
    harness.type_text("X").unwrap();
    harness.assert_buffer_content("one\ntwo\nthXree\n");
}

#[test]
fn test_escape_restores_cursor_and_scroll() {
    let text: String = (0..50).map(|i| format!("line {}\n", i)).collect();
    let (_fixture, mut harness) = open(&text);
    harness.send_key(Key::Down).unwrap();
    harness.send_key(Key::Right).unwrap();
    assert_eq!(harness.cursor_position(), (1, 1));

    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("line 40").unwrap();
    assert_eq!(harness.cursor_position(), (0, 40));
    assert_eq!(harness.screen_row(0), "line 40");

    harness.send_key(Key::Escape).unwrap();
    assert_eq!(harness.editor().prompt_kind(), None);
    assert_eq!(harness.cursor_position(), (1, 1));
    assert_eq!(harness.editor().state().viewport.row_offset, 0);
    assert_eq!(harness.screen_row(0), "line 0");
}

#[test]
fn test_no_match_leaves_cursor() {
    let (_fixture, mut harness) = open("alpha\nbeta\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("zzz").unwrap();
    assert_eq!(harness.cursor_position(), (0, 0));
    harness.send_key(Key::Enter).unwrap();
    assert_eq!(harness.cursor_position(), (0, 0));
}

#[test]
fn test_search_matches_rendered_text() {
    // Columns follow the rendered row, so a tab counts as its expansion
    let (_fixture, mut harness) = open("\tneedle\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("needle").unwrap();
    harness.send_key(Key::Enter).unwrap();
    assert_eq!(harness.cursor_position(), (1, 0));
    assert_eq!(harness.screen_cursor_position(), (0, 8));
}

#[test]
fn test_search_does_not_modify_document() {
    let (fixture, mut harness) = open("alpha\nbeta\n");
    harness.send_key(Key::Ctrl('f')).unwrap();
    harness.type_text("beta").unwrap();
    harness.send_key(Key::Enter).unwrap();
    assert!(!harness.editor().state().buffer.is_dirty());
    assert_eq!(fixture.read().unwrap(), "alpha\nbeta\n");
}

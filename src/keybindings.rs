//! The logical key set and the fixed key → action table.

use crate::cursor::Motion;

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character (tab included)
    Char(char),
    /// Control chord with a lowercase ASCII letter, e.g. `Ctrl('s')`
    Ctrl(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// What a key does while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InsertChar(char),
    InsertNewline,
    /// Delete the character before the cursor
    DeleteBackward,
    /// Delete the character under the cursor
    DeleteForward,
    Move(Motion),
    Home,
    End,
    PageUp,
    PageDown,
    Save,
    Find,
    Quit,
    /// Redraw without changing anything
    Refresh,
    None,
}

impl Action {
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Enter => Action::InsertNewline,
            Key::Ctrl('q') => Action::Quit,
            Key::Ctrl('s') => Action::Save,
            Key::Ctrl('f') => Action::Find,
            Key::Ctrl('h') | Key::Backspace => Action::DeleteBackward,
            Key::Delete => Action::DeleteForward,
            Key::Home => Action::Home,
            Key::End => Action::End,
            Key::PageUp => Action::PageUp,
            Key::PageDown => Action::PageDown,
            Key::Left => Action::Move(Motion::Left),
            Key::Right => Action::Move(Motion::Right),
            Key::Up => Action::Move(Motion::Up),
            Key::Down => Action::Move(Motion::Down),
            Key::Ctrl('l') | Key::Escape => Action::Refresh,
            Key::Char(c) => Action::InsertChar(c),
            Key::Ctrl(_) => Action::None,
        }
    }
}

//! Modal single-line prompt.
//!
//! While a prompt is open it receives every key. It ends either accepted (Enter with
//! non-empty input) or cancelled (Escape or the quit chord).

use crate::keybindings::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStatus {
    Editing,
    Accepted,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text for the message bar
    pub fn message(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
            PromptKind::Search => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }

    /// Apply one key to the input line
    pub fn handle_key(&mut self, key: Key) -> PromptStatus {
        match key {
            Key::Backspace | Key::Delete | Key::Ctrl('h') => {
                self.input.pop();
                PromptStatus::Editing
            }
            Key::Escape | Key::Ctrl('q') => PromptStatus::Cancelled,
            Key::Enter if !self.input.is_empty() => PromptStatus::Accepted,
            Key::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
                self.input.push(c);
                PromptStatus::Editing
            }
            _ => PromptStatus::Editing,
        }
    }
}

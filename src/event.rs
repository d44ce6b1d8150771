use crate::keybindings::Key;

/// Input delivered by the terminal driver to the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(Key),
    /// The terminal changed size; carries the new total rows and columns
    Resize { rows: u16, cols: u16 },
}

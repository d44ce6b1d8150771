//! Terminal driver backed by crossterm

use super::Terminal;
use crate::event::TermEvent;
use crate::keybindings::Key;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

/// The real terminal on stdin/stdout
pub struct CrosstermTerminal {
    stdout: Stdout,
    raw: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.stdout, EnterAlternateScreen, Clear(ClearType::All))
    }

    fn exit_raw_mode(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        execute!(
            self.stdout,
            Clear(ClearType::All),
            cursor::Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    fn read_event(&mut self) -> io::Result<TermEvent> {
        loop {
            if let Some(event) = translate_event(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn read_event_timeout(&mut self, timeout: Duration) -> io::Result<Option<TermEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(None);
            }
            if let Some(event) = translate_event(event::read()?) {
                return Ok(Some(event));
            }
        }
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.stdout.write_all(frame)?;
        self.stdout.flush()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(e) = self.exit_raw_mode() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Keys and resizes the editor understands; everything else is dropped
fn translate_event(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event).map(TermEvent::Key),
        Event::Resize(cols, rows) => Some(TermEvent::Resize { rows, cols }),
        _ => None,
    }
}

/// Map a crossterm key event onto the editor's key set. Releases and keys the editor
/// has no use for map to `None`.
pub fn translate_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Char('\t'),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(key)
}

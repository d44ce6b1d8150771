//! The per-session aggregate and the editing operations that act on it.

use crate::buffer::Buffer;
use crate::config::Config;
use crate::cursor::{Cursor, Motion};
use crate::viewport::Viewport;
use std::time::{Duration, Instant};

/// Text for the message bar, with the moment it was set
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            set_at: Instant::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text, if it was set less than `timeout` before `now`
    pub fn visible_at(&self, now: Instant, timeout: Duration) -> Option<&str> {
        let fresh = now.saturating_duration_since(self.set_at) < timeout;
        (fresh && !self.text.is_empty()).then_some(self.text.as_str())
    }

    /// Time left before the message disappears; `None` once it is gone or if it is empty
    pub fn remaining(&self, now: Instant, timeout: Duration) -> Option<Duration> {
        if self.text.is_empty() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.set_at);
        timeout.checked_sub(elapsed).filter(|left| !left.is_zero())
    }
}

/// Everything one editing session mutates
#[derive(Debug)]
pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub status: StatusMessage,
    pub config: Config,
}

impl EditorState {
    pub fn new(buffer: Buffer, viewport: Viewport, config: Config) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport,
            status: StatusMessage::new(""),
            config,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = StatusMessage::new(text);
    }

    /// Insert a byte at the cursor, creating a row if the cursor is past the end
    pub fn insert_char(&mut self, c: u8) {
        if self.cursor.cy == self.buffer.num_rows() {
            self.buffer.insert_row(self.buffer.num_rows(), Vec::new());
        }
        self.buffer.row_insert_char(self.cursor.cy, self.cursor.cx, c);
        self.cursor.cx += 1;
    }

    /// Insert a character as its UTF-8 bytes
    pub fn insert_text_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        for &b in c.encode_utf8(&mut buf).as_bytes() {
            self.insert_char(b);
        }
    }

    /// Split the current row at the cursor and move to the start of the new row
    pub fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.buffer.insert_row(self.cursor.cy, Vec::new());
        } else {
            self.buffer.split_row(self.cursor.cy, self.cursor.cx);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    /// Backspace: remove the byte before the cursor, joining rows at column 0
    pub fn delete_char(&mut self) {
        let Cursor { cx, cy, .. } = self.cursor;

        if cx == 0 && cy == 0 {
            return;
        }
        if cy >= self.buffer.num_rows() {
            if let Some(prev) = cy.checked_sub(1) {
                self.cursor.cy = prev;
                self.cursor.cx = self.buffer.row(prev).map_or(0, |row| row.len());
            }
            return;
        }

        if cx > 0 {
            self.buffer.row_delete_char(cy, cx - 1);
            self.cursor.cx -= 1;
        } else {
            let prev_len = self.buffer.row(cy - 1).map_or(0, |row| row.len());
            self.buffer.join_with_previous(cy);
            self.cursor.cy = cy - 1;
            self.cursor.cx = prev_len;
        }
    }

    /// Delete key: step right, then backspace
    pub fn delete_forward(&mut self) {
        self.cursor.move_by(Motion::Right, &self.buffer);
        self.delete_char();
    }

    pub fn move_cursor(&mut self, motion: Motion) {
        self.cursor.move_by(motion, &self.buffer);
    }

    /// Jump to the top of the screen and go up one screenful
    pub fn page_up(&mut self) {
        self.cursor.cy = self.viewport.row_offset;
        for _ in 0..self.viewport.rows {
            self.cursor.move_by(Motion::Up, &self.buffer);
        }
    }

    /// Jump to the bottom of the screen and go down one screenful
    pub fn page_down(&mut self) {
        let bottom = (self.viewport.row_offset + self.viewport.rows).saturating_sub(1);
        self.cursor.cy = bottom.min(self.buffer.num_rows());
        for _ in 0..self.viewport.rows {
            self.cursor.move_by(Motion::Down, &self.buffer);
        }
    }

    /// Adopt a new terminal size and keep the cursor on screen
    pub fn resize(&mut self, term_rows: usize, term_cols: usize) {
        self.viewport.resize(term_rows, term_cols);
        self.cursor.clamp_to_row(&self.buffer);
    }

    /// Bring the cursor into view; run before every frame
    pub fn scroll(&mut self) {
        self.viewport.scroll(&mut self.cursor, &self.buffer);
    }
}

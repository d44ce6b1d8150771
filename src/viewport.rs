use crate::buffer::Buffer;
use crate::cursor::Cursor;

/// Rows reserved at the bottom of the terminal for the status and message bars
pub const BAR_ROWS: usize = 2;

/// The visible window into the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First document row shown
    pub row_offset: usize,
    /// First rendered column shown
    pub col_offset: usize,
    /// Text rows available (terminal height minus the bars)
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    /// Viewport for a terminal of the given size
    pub fn new(term_rows: usize, term_cols: usize) -> Self {
        let mut viewport = Self::default();
        viewport.resize(term_rows, term_cols);
        viewport
    }

    /// Adopt a new terminal size
    pub fn resize(&mut self, term_rows: usize, term_cols: usize) {
        self.rows = term_rows.saturating_sub(BAR_ROWS);
        self.cols = term_cols;
    }

    /// Refresh `cursor.rx`, then move the offsets by the least amount that puts the
    /// cursor inside the window.
    pub fn scroll(&mut self, cursor: &mut Cursor, buffer: &Buffer) {
        cursor.rx = buffer
            .row(cursor.cy)
            .map_or(0, |row| row.cx_to_rx(cursor.cx, buffer.tab_stop()));

        if cursor.cy < self.row_offset {
            self.row_offset = cursor.cy;
        }
        if cursor.cy >= self.row_offset + self.rows {
            self.row_offset = (cursor.cy + 1).saturating_sub(self.rows);
        }
        if cursor.rx < self.col_offset {
            self.col_offset = cursor.rx;
        }
        if cursor.rx >= self.col_offset + self.cols {
            self.col_offset = (cursor.rx + 1).saturating_sub(self.cols);
        }
    }
}

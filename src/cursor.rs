use crate::buffer::Buffer;

/// Direction of a single-step cursor motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
}

/// Cursor position in raw (`cx`, `cy`) and rendered (`rx`) coordinates.
///
/// `cy` may equal the row count: the virtual line just past the end of the document,
/// where typing creates a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    /// Rendered column of `cx`, refreshed by the viewport before each frame
    pub rx: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one step, wrapping across line ends for horizontal motion and clamping the
    /// column to the length of the destination row.
    pub fn move_by(&mut self, motion: Motion, buffer: &Buffer) {
        let row_len = buffer.row(self.cy).map(|row| row.len());

        match motion {
            Motion::Left => {
                if self.cx != 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = buffer.row(self.cy).map_or(0, |row| row.len());
                }
            }
            Motion::Right => match row_len {
                Some(len) if self.cx < len => self.cx += 1,
                Some(len) if self.cx == len => {
                    self.cy += 1;
                    self.cx = 0;
                }
                _ => {}
            },
            Motion::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Motion::Down => {
                if self.cy < buffer.num_rows() {
                    self.cy += 1;
                }
            }
        }

        self.clamp_to_row(buffer);
    }

    /// Start of the current row
    pub fn home(&mut self) {
        self.cx = 0;
    }

    /// End of the current row; no-op on the virtual line
    pub fn end(&mut self, buffer: &Buffer) {
        if let Some(row) = buffer.row(self.cy) {
            self.cx = row.len();
        }
    }

    /// Pull the cursor back inside the document after rows disappeared
    pub fn clamp_to_row(&mut self, buffer: &Buffer) {
        self.cy = self.cy.min(buffer.num_rows());
        let row_len = buffer.row(self.cy).map_or(0, |row| row.len());
        self.cx = self.cx.min(row_len);
    }
}

//! Incremental search across rows.
//!
//! Each keystroke of the search prompt re-runs the search from the last hit. The hit is
//! shown by painting `Highlight::Match` over it; the row's own tags are kept aside and
//! put back before the next step.

use crate::buffer::Buffer;
use crate::cursor::Cursor;
use crate::highlight::Highlight;
use crate::keybindings::Key;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// State of one search session, from opening the prompt to closing it
#[derive(Debug)]
pub struct Search {
    last_match: Option<usize>,
    direction: Direction,
    /// Row and original tags under the current match overlay
    saved_hl: Option<(usize, Vec<Highlight>)>,
    saved_cursor: Cursor,
    saved_viewport: Viewport,
}

impl Search {
    /// Start searching; remembers where to return to on cancel
    pub fn begin(cursor: Cursor, viewport: Viewport) -> Self {
        Self {
            last_match: None,
            direction: Direction::Forward,
            saved_hl: None,
            saved_cursor: cursor,
            saved_viewport: viewport,
        }
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Process one prompt key with the query as it stands after that key.
    ///
    /// Returns the matched row, if any. Enter and Escape only clear the overlay.
    pub fn step(
        &mut self,
        query: &str,
        key: Key,
        buffer: &mut Buffer,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) -> Option<usize> {
        self.clear_overlay(buffer);

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.direction = Direction::Forward;
                return None;
            }
            Key::Right | Key::Down => self.direction = Direction::Forward,
            Key::Left | Key::Up => self.direction = Direction::Backward,
            _ => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }

        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }
        if query.is_empty() {
            return None;
        }

        let (row, offset) = find_from(buffer, query.as_bytes(), self.last_match, self.direction)?;
        self.last_match = Some(row);

        let r = buffer.row(row)?;
        cursor.cy = row;
        cursor.cx = r.rx_to_cx(offset, buffer.tab_stop());
        // Push the offset past the end so the next scroll puts the match at the top
        viewport.row_offset = buffer.num_rows();

        let saved = buffer.highlights(row).map(<[Highlight]>::to_vec).unwrap_or_default();
        self.saved_hl = Some((row, saved));
        buffer.overlay_highlight(row, offset..offset + query.len(), Highlight::Match);

        tracing::debug!(row, offset, "search hit");
        Some(row)
    }

    /// Close the session; a cancelled search puts cursor and scroll back
    pub fn finish(
        mut self,
        accepted: bool,
        buffer: &mut Buffer,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) {
        self.clear_overlay(buffer);
        if !accepted {
            *cursor = self.saved_cursor;
            viewport.row_offset = self.saved_viewport.row_offset;
            viewport.col_offset = self.saved_viewport.col_offset;
        }
    }

    fn clear_overlay(&mut self, buffer: &mut Buffer) {
        if let Some((row, hl)) = self.saved_hl.take() {
            buffer.restore_highlights(row, hl);
        }
    }
}

/// Scan rows starting after `last` in `direction`, wrapping around the document, for
/// the first row whose render text contains `needle`. Visits every row at most once.
fn find_from(
    buffer: &Buffer,
    needle: &[u8],
    last: Option<usize>,
    direction: Direction,
) -> Option<(usize, usize)> {
    let n = buffer.num_rows();
    if n == 0 {
        return None;
    }

    let mut current = last;
    for _ in 0..n {
        let next = match (current, direction) {
            (None, _) => 0,
            (Some(i), Direction::Forward) => (i + 1) % n,
            (Some(0), Direction::Backward) => n - 1,
            (Some(i), Direction::Backward) => i - 1,
        };
        current = Some(next);

        let row = buffer.row(next)?;
        if let Some(offset) = find_bytes(&row.render, needle) {
            return Some((next, offset));
        }
    }
    None
}

/// Naive substring search
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

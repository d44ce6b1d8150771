//! A single document line.
//!
//! `chars` is what gets saved; `render` is what gets drawn (tabs expanded to the next
//! tab stop); `hl` carries one tag per rendered byte.

use crate::highlight::Highlight;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Position of this row in the buffer
    pub idx: usize,
    pub chars: Vec<u8>,
    pub render: Vec<u8>,
    pub hl: Vec<Highlight>,
    /// A multi-line comment is still open at the end of this row
    pub hl_open_comment: bool,
}

impl Row {
    /// Create a row with its render text derived. Highlight is left empty for the
    /// buffer to fill in, since it depends on the previous row.
    pub fn new(idx: usize, chars: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            idx,
            chars,
            ..Default::default()
        };
        row.update_render(tab_stop);
        row
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Regenerate `render` from `chars`. `hl` is reset to `Normal` at the new length.
    pub fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.chars.iter().filter(|&&c| c == b'\t').count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (tab_stop - 1));

        for &c in &self.chars {
            if c == b'\t' {
                render.push(b' ');
                while render.len() % tab_stop != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(c);
            }
        }

        self.hl = vec![Highlight::Normal; render.len()];
        self.render = render;
    }

    /// Rendered column of raw column `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &c| rx + char_width(c, rx, tab_stop))
    }

    /// Raw column whose rendered span covers `rx`, or the row length if `rx` lies past
    /// the end.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            cur_rx += char_width(c, cur_rx, tab_stop);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Insert a byte at `at`, clamped to the end of the row.
    pub fn insert_char(&mut self, at: usize, c: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, c);
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
    }

    /// Remove the byte at `at`. Returns false if `at` is out of range.
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        true
    }
}

/// Columns taken by byte `c` when drawn starting at rendered column `rx`.
fn char_width(c: u8, rx: usize, tab_stop: usize) -> usize {
    if c == b'\t' {
        tab_stop - (rx % tab_stop)
    } else {
        1
    }
}

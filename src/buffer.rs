use crate::highlight::{highlight_row, Highlight};
use crate::row::Row;
use crate::syntax::{self, Language};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// The document: an ordered list of rows plus file and highlighting context.
///
/// Every mutation keeps `Row::idx` equal to the row's position, regenerates the
/// render text of the touched row and re-highlights it, pushing multi-line comment
/// state forward through following rows until it stops changing.
#[derive(Debug)]
pub struct Buffer {
    rows: Vec<Row>,

    /// Optional file path for persistence
    file_path: Option<PathBuf>,

    /// Number of modifications since load or last save
    dirty: usize,

    language: Option<&'static Language>,

    tab_stop: usize,
}

impl Buffer {
    /// Create a new empty buffer
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            file_path: None,
            dirty: 0,
            language: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Create a clean buffer from lines with their terminators already stripped
    pub fn from_lines<I>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut buffer = Self::new(tab_stop);
        buffer.load_lines(lines);
        buffer
    }

    /// Append `lines` as rows and mark the buffer clean
    pub fn load_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        for line in lines {
            self.insert_row(self.rows.len(), line);
        }
        self.dirty = 0;
    }

    /// Every row followed by a newline, in order
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(&row.chars);
            out.push(b'\n');
        }
        out
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Set the file path and pick the language it implies
    pub fn set_file_path(&mut self, path: PathBuf) {
        let language = syntax::select_language(&path.to_string_lossy());
        self.file_path = Some(path);
        self.set_language(language);
    }

    pub fn language(&self) -> Option<&'static Language> {
        self.language
    }

    /// Switch language and re-highlight the whole document
    pub fn set_language(&mut self, language: Option<&'static Language>) {
        self.language = language;
        for at in 0..self.rows.len() {
            self.highlight_one(at);
        }
    }

    /// Has the buffer been modified since the last load or save?
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = 0;
    }

    /// Insert a row at `at`. Out-of-range positions are ignored.
    pub fn insert_row(&mut self, at: usize, chars: Vec<u8>) {
        if at > self.rows.len() {
            return;
        }

        self.rows.insert(at, Row::new(at, chars, self.tab_stop));
        for row in &mut self.rows[at + 1..] {
            row.idx += 1;
        }

        self.update_syntax(at);
        // The row that used to sit here was highlighted against a different predecessor
        if at + 1 < self.rows.len() {
            self.update_syntax(at + 1);
        }
        self.dirty += 1;
    }

    /// Delete the row at `at`. Out-of-range positions are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }

        self.rows.remove(at);
        for row in &mut self.rows[at..] {
            row.idx -= 1;
        }

        if at < self.rows.len() {
            self.update_syntax(at);
        }
        self.dirty += 1;
    }

    /// Insert byte `c` at column `at` of row `row` (column clamped to the row end)
    pub fn row_insert_char(&mut self, row: usize, at: usize, c: u8) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.insert_char(at, c);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Append raw bytes to the end of row `row`
    pub fn row_append_bytes(&mut self, row: usize, bytes: &[u8]) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.append_bytes(bytes);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Delete the byte at column `at` of row `row`. Invalid positions are ignored.
    pub fn row_delete_char(&mut self, row: usize, at: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        if r.delete_char(at) {
            self.update_row(row);
            self.dirty += 1;
        }
    }

    /// Split row `row` at column `at`; the tail becomes a new row below it
    pub fn split_row(&mut self, row: usize, at: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        let at = at.min(r.len());
        let tail = r.chars.split_off(at);
        self.update_row(row);
        self.insert_row(row + 1, tail);
    }

    /// Append row `row` to the end of the previous row and remove it
    pub fn join_with_previous(&mut self, row: usize) {
        if row == 0 || row >= self.rows.len() {
            return;
        }
        let chars = std::mem::take(&mut self.rows[row].chars);
        self.row_append_bytes(row - 1, &chars);
        self.delete_row(row);
    }

    /// Highlight tags of row `at`
    pub fn highlights(&self, at: usize) -> Option<&[Highlight]> {
        self.rows.get(at).map(|row| row.hl.as_slice())
    }

    /// Replace the highlight tags of row `at` wholesale. Used to undo a temporary
    /// overlay; the length must match the render text or the call is ignored.
    pub fn restore_highlights(&mut self, at: usize, hl: Vec<Highlight>) {
        if let Some(row) = self.rows.get_mut(at) {
            if row.hl.len() == hl.len() {
                row.hl = hl;
            }
        }
    }

    /// Paint `tag` over a rendered range of row `at` without touching comment state
    pub fn overlay_highlight(&mut self, at: usize, range: Range<usize>, tag: Highlight) {
        if let Some(row) = self.rows.get_mut(at) {
            let end = range.end.min(row.hl.len());
            let start = range.start.min(end);
            row.hl[start..end].fill(tag);
        }
    }

    /// Regenerate render text for `at` and re-highlight from there
    fn update_row(&mut self, at: usize) {
        if let Some(row) = self.rows.get_mut(at) {
            row.update_render(self.tab_stop);
            self.update_syntax(at);
        }
    }

    /// Highlight row `at`, then keep going down while the trailing comment flag of
    /// the row just processed changed.
    fn update_syntax(&mut self, at: usize) {
        let mut at = at;
        while at < self.rows.len() {
            if !self.highlight_one(at) {
                break;
            }
            at += 1;
        }
    }

    /// Highlight a single row; returns whether its trailing comment flag changed
    fn highlight_one(&mut self, at: usize) -> bool {
        let in_comment = at > 0 && self.rows[at - 1].hl_open_comment;
        let row = &mut self.rows[at];
        let result = highlight_row(&row.render, self.language, in_comment);
        row.hl = result.tags;
        let changed = row.hl_open_comment != result.open_comment;
        row.hl_open_comment = result.open_comment;
        changed
    }
}

//! Frame compositor.
//!
//! Turns the session state into one byte stream: text rows, status bar, message bar and
//! the final cursor position. Colour escapes are only written when the colour actually
//! changes between neighbouring characters.

use crate::highlight::Highlight;
use crate::row::Row;
use crate::state::EditorState;
use crate::view::theme::Theme;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::time::Instant;

/// Longest file name shown in the status bar
const STATUS_FILENAME_MAX: usize = 20;

/// Compose a full frame into `out`. The viewport must already be scrolled.
pub fn draw_frame<W: Write>(
    state: &EditorState,
    theme: &Theme,
    now: Instant,
    out: &mut W,
) -> io::Result<()> {
    queue!(out, Hide, MoveTo(0, 0))?;
    draw_rows(state, theme, out)?;
    draw_status_bar(state, out)?;
    draw_message_bar(state, now, out)?;

    let viewport = &state.viewport;
    let x = state.cursor.rx.saturating_sub(viewport.col_offset);
    let y = state.cursor.cy.saturating_sub(viewport.row_offset);
    queue!(out, MoveTo(to_u16(x), to_u16(y)), Show)?;
    out.flush()
}

/// Convenience wrapper returning the frame as bytes
pub fn render_frame(state: &EditorState, theme: &Theme, now: Instant) -> Vec<u8> {
    let mut frame = Vec::new();
    // Writing into a Vec cannot fail
    let _ = draw_frame(state, theme, now, &mut frame);
    frame
}

fn draw_rows<W: Write>(state: &EditorState, theme: &Theme, out: &mut W) -> io::Result<()> {
    let viewport = &state.viewport;
    for y in 0..viewport.rows {
        let filerow = y + viewport.row_offset;
        match state.buffer.row(filerow) {
            Some(row) => draw_text_row(row, viewport.col_offset, viewport.cols, theme, out)?,
            None if state.buffer.is_empty() && y == viewport.rows / 3 => {
                draw_welcome(&state.config.welcome_message, viewport.cols, out)?
            }
            None => out.write_all(b"~")?,
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
        out.write_all(b"\r\n")?;
    }
    Ok(())
}

fn draw_welcome<W: Write>(message: &str, cols: usize, out: &mut W) -> io::Result<()> {
    let message = &message.as_bytes()[..message.len().min(cols)];
    let mut padding = (cols - message.len()) / 2;
    if padding > 0 {
        out.write_all(b"~")?;
        padding -= 1;
    }
    out.write_all(&b" ".repeat(padding))?;
    out.write_all(message)
}

/// Draw the visible slice of one row
fn draw_text_row<W: Write>(
    row: &Row,
    col_offset: usize,
    cols: usize,
    theme: &Theme,
    out: &mut W,
) -> io::Result<()> {
    let start = col_offset.min(row.render.len());
    let end = (start + cols).min(row.render.len());
    let mut current: Option<Color> = None;

    for (&c, &hl) in row.render[start..end].iter().zip(&row.hl[start..end]) {
        if c.is_ascii_control() {
            let sym = if c <= 26 { b'@' + c } else { b'?' };
            queue!(out, SetAttribute(Attribute::Reverse))?;
            out.write_all(&[sym])?;
            queue!(out, SetAttribute(Attribute::Reset))?;
            if let Some(color) = current {
                queue!(out, SetForegroundColor(color))?;
            }
        } else if hl == Highlight::Normal {
            if current.take().is_some() {
                queue!(out, SetForegroundColor(Color::Reset))?;
            }
            out.write_all(&[c])?;
        } else {
            let color = theme.color(hl);
            if current != Some(color) {
                current = Some(color);
                queue!(out, SetForegroundColor(color))?;
            }
            out.write_all(&[c])?;
        }
    }
    queue!(out, SetForegroundColor(Color::Reset))
}

/// Left and right halves of the status bar
pub fn status_text(state: &EditorState) -> (String, String) {
    let buffer = &state.buffer;
    let name = match buffer.file_path() {
        Some(path) => path
            .to_string_lossy()
            .chars()
            .take(STATUS_FILENAME_MAX)
            .collect(),
        None => "[No Name]".to_string(),
    };
    let modified = if buffer.is_dirty() { "(modified)" } else { "" };
    let left = format!("{} - {} lines {}", name, buffer.num_rows(), modified);

    let filetype = buffer.language().map_or("no ft", |lang| lang.name);
    let right = format!(
        "{} | {}/{}",
        filetype,
        state.cursor.cy + 1,
        buffer.num_rows()
    );
    (left, right)
}

fn draw_status_bar<W: Write>(state: &EditorState, out: &mut W) -> io::Result<()> {
    let cols = state.viewport.cols;
    let (left, right) = status_text(state);
    let left: String = left.chars().take(cols).collect();
    let right_len = right.chars().count();

    queue!(out, SetAttribute(Attribute::Reverse))?;
    out.write_all(left.as_bytes())?;
    let mut len = left.chars().count();
    while len < cols {
        if cols - len == right_len {
            out.write_all(right.as_bytes())?;
            break;
        }
        out.write_all(b" ")?;
        len += 1;
    }
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.write_all(b"\r\n")
}

fn draw_message_bar<W: Write>(state: &EditorState, now: Instant, out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    if let Some(text) = state.status.visible_at(now, state.config.message_timeout()) {
        let text: String = text.chars().take(state.viewport.cols).collect();
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

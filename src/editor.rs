//! The editing session: one key in, state updated, one frame out.

use crate::buffer::Buffer;
use crate::config::Config;
use crate::event::TermEvent;
use crate::keybindings::{Action, Key};
use crate::prompt::{Prompt, PromptKind, PromptStatus};
use crate::search::Search;
use crate::services::fs::FileSystem;
use crate::services::terminal::Terminal;
use crate::state::EditorState;
use crate::view::screen;
use crate::view::theme::Theme;
use crate::viewport::Viewport;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// A prompt that currently owns the keyboard
struct ActivePrompt {
    prompt: Prompt,
    /// Present for search prompts; fed every keystroke
    search: Option<Search>,
}

pub struct Editor<T: Terminal, F: FileSystem> {
    state: EditorState,
    terminal: T,
    fs: F,
    theme: Theme,
    prompt: Option<ActivePrompt>,
    /// Quit presses still required before unsaved changes are discarded
    quit_times: usize,
    should_quit: bool,
}

impl<T: Terminal, F: FileSystem> Editor<T, F> {
    /// Create a session with an empty, unnamed buffer sized to the terminal
    pub fn new(terminal: T, fs: F, config: Config) -> io::Result<Self> {
        let (rows, cols) = terminal.size()?;
        let viewport = Viewport::new(rows as usize, cols as usize);
        let buffer = Buffer::new(config.tab_stop);
        let quit_times = config.quit_times;
        let theme = Theme::default();
        tracing::debug!("Using theme {}", theme.name);
        Ok(Self {
            state: EditorState::new(buffer, viewport, config),
            terminal,
            fs,
            theme,
            prompt: None,
            quit_times,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Is a prompt currently capturing input?
    pub fn prompt_kind(&self) -> Option<PromptKind> {
        self.prompt.as_ref().map(|active| active.prompt.kind())
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.state.set_status(text);
    }

    /// Load `path` into a fresh buffer. A missing file is created empty first.
    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        if !self.fs.exists(path) {
            self.fs.write_all(path, b"")?;
        }
        let lines = self.fs.read_lines(path)?;

        let mut buffer = Buffer::new(self.state.config.tab_stop);
        buffer.set_file_path(path.to_path_buf());
        buffer.load_lines(lines);
        tracing::info!(
            "Opened {} ({} lines, language {:?})",
            path.display(),
            buffer.num_rows(),
            buffer.language().map(|l| l.name)
        );

        self.state.buffer = buffer;
        self.state.cursor = Default::default();
        self.state.viewport.row_offset = 0;
        self.state.viewport.col_offset = 0;
        Ok(())
    }

    /// Run the key loop until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        self.refresh_screen()?;
        while !self.should_quit {
            // A visible message bounds the wait so its expiry gets drawn
            let expiry = self
                .state
                .status
                .remaining(Instant::now(), self.state.config.message_timeout());
            let event = match expiry {
                Some(wait) => self.terminal.read_event_timeout(wait)?,
                None => Some(self.terminal.read_event()?),
            };
            match event {
                Some(event) => self.handle_event(event),
                None => tracing::trace!("Status message expired"),
            }
            self.refresh_screen()?;
        }
        tracing::info!("Quit");
        Ok(())
    }

    /// Scroll, compose and write one frame
    pub fn refresh_screen(&mut self) -> io::Result<()> {
        self.state.scroll();
        let frame = screen::render_frame(&self.state, &self.theme, Instant::now());
        self.terminal.write_frame(&frame)
    }

    pub fn handle_event(&mut self, event: TermEvent) {
        match event {
            TermEvent::Key(key) => self.handle_key(key),
            TermEvent::Resize { rows, cols } => {
                tracing::debug!(rows, cols, "resize");
                self.state.resize(rows as usize, cols as usize);
            }
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        let action = Action::from_key(key);
        if action == Action::Quit {
            self.quit();
            return;
        }

        match action {
            Action::InsertChar(c) => {
                if c == '\t' || !c.is_control() {
                    self.state.insert_text_char(c);
                }
            }
            Action::InsertNewline => self.state.insert_newline(),
            Action::DeleteBackward => self.state.delete_char(),
            Action::DeleteForward => self.state.delete_forward(),
            Action::Move(motion) => self.state.move_cursor(motion),
            Action::Home => self.state.cursor.home(),
            Action::End => self.state.cursor.end(&self.state.buffer),
            Action::PageUp => self.state.page_up(),
            Action::PageDown => self.state.page_down(),
            Action::Save => self.save(),
            Action::Find => self.start_search(),
            Action::Quit | Action::Refresh | Action::None => {}
        }

        self.quit_times = self.state.config.quit_times;
    }

    fn quit(&mut self) {
        if self.state.buffer.is_dirty() && self.quit_times > 0 {
            let message = format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_times
            );
            self.state.set_status(message);
            self.quit_times -= 1;
            return;
        }
        self.should_quit = true;
    }

    /// Save to the buffer's path, asking for one first if it has none
    pub fn save(&mut self) {
        if self.state.buffer.file_path().is_none() {
            self.open_prompt(PromptKind::SaveAs);
            return;
        }
        self.write_buffer();
    }

    fn write_buffer(&mut self) {
        let Some(path) = self.state.buffer.file_path().map(Path::to_path_buf) else {
            return;
        };
        let bytes = self.state.buffer.to_bytes();
        match self.fs.write_all(&path, &bytes) {
            Ok(()) => {
                self.state.buffer.clear_dirty();
                tracing::info!("Saved {} bytes to {}", bytes.len(), path.display());
                self.state
                    .set_status(format!("{} bytes written to disk", bytes.len()));
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.state.set_status(format!("Can't save! I/O error: {}", e));
            }
        }
    }

    fn start_search(&mut self) {
        self.open_prompt(PromptKind::Search);
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let search = match kind {
            PromptKind::Search => Some(Search::begin(self.state.cursor, self.state.viewport)),
            PromptKind::SaveAs => None,
        };
        let prompt = Prompt::new(kind);
        self.state.set_status(prompt.message());
        self.prompt = Some(ActivePrompt { prompt, search });
    }

    fn handle_prompt_key(&mut self, key: Key) {
        let Some(active) = self.prompt.as_mut() else {
            return;
        };

        let status = active.prompt.handle_key(key);
        if let Some(search) = active.search.as_mut() {
            search.step(
                active.prompt.input(),
                key,
                &mut self.state.buffer,
                &mut self.state.cursor,
                &mut self.state.viewport,
            );
        }

        if status == PromptStatus::Editing {
            self.state.set_status(active.prompt.message());
            return;
        }

        self.state.set_status("");
        if let Some(active) = self.prompt.take() {
            self.finish_prompt(active, status == PromptStatus::Accepted);
        }
    }

    fn finish_prompt(&mut self, active: ActivePrompt, accepted: bool) {
        let ActivePrompt { prompt, search } = active;
        match prompt.kind() {
            PromptKind::SaveAs if accepted => {
                self.state.buffer.set_file_path(PathBuf::from(prompt.input()));
                self.write_buffer();
            }
            PromptKind::SaveAs => self.state.set_status("Save aborted"),
            PromptKind::Search => {
                if let Some(search) = search {
                    search.finish(
                        accepted,
                        &mut self.state.buffer,
                        &mut self.state.cursor,
                        &mut self.state.viewport,
                    );
                }
            }
        }
    }
}

/// Run a whole session on `terminal`: raw mode, optional file, key loop, restore.
///
/// Only terminal failures are returned as errors. A file that cannot be opened is
/// reported on screen and ends the session after one key press.
pub fn run_session<T: Terminal, F: FileSystem>(
    terminal: T,
    fs: F,
    config: Config,
    file: Option<PathBuf>,
) -> io::Result<()> {
    let mut editor = Editor::new(terminal, fs, config)?;
    editor.terminal.enter_raw_mode()?;
    let result = editor.start(file);
    let restored = editor.terminal.exit_raw_mode();
    result.and(restored)
}

impl<T: Terminal, F: FileSystem> Editor<T, F> {
    fn start(&mut self, file: Option<PathBuf>) -> io::Result<()> {
        if let Some(path) = file {
            if let Err(e) = self.open_file(&path) {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                self.state.set_status(format!(
                    "File cannot be opened: {}. Press any key to exit",
                    e
                ));
                self.refresh_screen()?;
                self.terminal.read_event()?;
                return Ok(());
            }
        }

        self.state.set_status(HELP_MESSAGE);
        self.run()
    }
}

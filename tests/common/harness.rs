use kite::config::Config;
use kite::editor::Editor;
use kite::event::TermEvent;
use kite::keybindings::Key;
use kite::services::fs::StdFileSystem;
use kite::services::terminal::Terminal;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// What a scripted terminal saw, shared with the test that owns it
#[derive(Debug, Default)]
pub struct TerminalLog {
    pub frames: Vec<Vec<u8>>,
    pub raw_mode: bool,
    pub raw_mode_entered: usize,
    pub raw_mode_exited: usize,
}

/// One entry of a terminal script
enum Step {
    Event(TermEvent),
    /// No input for as long as the editor is willing to wait
    Idle,
}

/// A terminal that replays queued events and records every frame.
///
/// Reading past the end of the script fails with `UnexpectedEof`, which ends a
/// session the same way a closed terminal would.
pub struct ScriptedTerminal {
    events: VecDeque<Step>,
    size: (u16, u16),
    log: Rc<RefCell<TerminalLog>>,
}

impl ScriptedTerminal {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            events: VecDeque::new(),
            size: (rows, cols),
            log: Rc::new(RefCell::new(TerminalLog::default())),
        }
    }

    pub fn with_keys(rows: u16, cols: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        let mut terminal = Self::new(rows, cols);
        terminal.push_events(keys.into_iter().map(TermEvent::Key));
        terminal
    }

    pub fn push_events(&mut self, events: impl IntoIterator<Item = TermEvent>) {
        self.events.extend(events.into_iter().map(Step::Event));
    }

    /// Let a timed read run out. The wait really elapses, so keep timeouts short.
    pub fn push_idle(&mut self) {
        self.events.push_back(Step::Idle);
    }

    /// Handle on the log that stays valid after the terminal is moved away
    pub fn log(&self) -> Rc<RefCell<TerminalLog>> {
        Rc::clone(&self.log)
    }

    pub fn set_size(&mut self, rows: u16, cols: u16) {
        self.size = (rows, cols);
    }
}

impl Terminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        let mut log = self.log.borrow_mut();
        log.raw_mode = true;
        log.raw_mode_entered += 1;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> io::Result<()> {
        let mut log = self.log.borrow_mut();
        log.raw_mode = false;
        log.raw_mode_exited += 1;
        Ok(())
    }

    fn read_event(&mut self) -> io::Result<TermEvent> {
        // A blocking read sits through idle time
        loop {
            match self.events.pop_front() {
                Some(Step::Event(event)) => return Ok(event),
                Some(Step::Idle) => continue,
                None => return Err(script_exhausted()),
            }
        }
    }

    fn read_event_timeout(&mut self, timeout: Duration) -> io::Result<Option<TermEvent>> {
        match self.events.pop_front() {
            Some(Step::Event(event)) => Ok(Some(event)),
            Some(Step::Idle) => {
                thread::sleep(timeout);
                Ok(None)
            }
            None => Err(script_exhausted()),
        }
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.log.borrow_mut().frames.push(frame.to_vec());
        Ok(())
    }
}

fn script_exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
}

/// Feed the frames a terminal received into a vt100 screen of the given size
pub fn parse_frames(frames: &[Vec<u8>], rows: u16, cols: u16) -> vt100::Parser {
    let mut parser = vt100::Parser::new(rows, cols, 0);
    for frame in frames {
        parser.process(frame);
    }
    parser
}

/// Drives an editor key by key and reads back what the terminal shows
pub struct EditorTestHarness {
    editor: Editor<ScriptedTerminal, StdFileSystem>,
    log: Rc<RefCell<TerminalLog>>,
    parser: vt100::Parser,
    /// Frames already fed to the parser
    seen: usize,
}

impl EditorTestHarness {
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> io::Result<Self> {
        let terminal = ScriptedTerminal::new(height, width);
        let log = terminal.log();
        let editor = Editor::new(terminal, StdFileSystem, config)?;
        Ok(Self {
            editor,
            log,
            parser: vt100::Parser::new(height, width, 0),
            seen: 0,
        })
    }

    pub fn editor(&self) -> &Editor<ScriptedTerminal, StdFileSystem> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor<ScriptedTerminal, StdFileSystem> {
        &mut self.editor
    }

    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        self.editor.open_file(path)?;
        self.render()
    }

    pub fn send_key(&mut self, key: Key) -> io::Result<()> {
        self.editor.handle_event(TermEvent::Key(key));
        self.render()
    }

    /// Type each character; `\n` presses Enter
    pub fn type_text(&mut self, text: &str) -> io::Result<()> {
        for c in text.chars() {
            let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
            self.editor.handle_event(TermEvent::Key(key));
        }
        self.render()
    }

    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.editor.terminal_mut().set_size(height, width);
        self.parser = vt100::Parser::new(height, width, 0);
        self.editor.handle_event(TermEvent::Resize {
            rows: height,
            cols: width,
        });
        self.render()
    }

    /// Draw a frame and feed everything new to the screen model
    pub fn render(&mut self) -> io::Result<()> {
        self.editor.refresh_screen()?;
        let log = self.log.borrow();
        for frame in &log.frames[self.seen..] {
            self.parser.process(frame);
        }
        self.seen = log.frames.len();
        Ok(())
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }

    pub fn screen_to_string(&self) -> String {
        self.parser.screen().contents()
    }

    /// One screen row with trailing blanks removed
    pub fn screen_row(&self, row: u16) -> String {
        let cols = self.parser.screen().size().1;
        self.parser
            .screen()
            .contents_between(row, 0, row, cols)
            .trim_end()
            .to_string()
    }

    /// The status bar sits two rows above the bottom
    pub fn status_bar(&self) -> String {
        let rows = self.parser.screen().size().0;
        self.screen_row(rows - 2)
    }

    pub fn message_bar(&self) -> String {
        let rows = self.parser.screen().size().0;
        self.screen_row(rows - 1)
    }

    pub fn screen_cursor_position(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }

    /// Document cursor as (cx, cy)
    pub fn cursor_position(&self) -> (usize, usize) {
        let cursor = self.editor.state().cursor;
        (cursor.cx, cursor.cy)
    }

    pub fn get_buffer_content(&self) -> String {
        String::from_utf8_lossy(&self.editor.state().buffer.to_bytes()).into_owned()
    }

    pub fn assert_buffer_content(&self, expected: &str) {
        assert_eq!(self.get_buffer_content(), expected);
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "expected screen to contain {:?}\nscreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "expected screen not to contain {:?}\nscreen:\n{}",
            text,
            screen
        );
    }
}

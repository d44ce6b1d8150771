//! Terminal driver boundary.
//!
//! The editor core only needs a handful of things from a terminal: raw mode on/off, one
//! decoded input event at a time (optionally with a deadline), the window size, and a way
//! to put a finished frame on screen.

mod term;

pub use term::{translate_key, CrosstermTerminal};

use crate::event::TermEvent;
use std::io;
use std::time::Duration;

pub trait Terminal {
    /// Switch the terminal into raw mode. Failing here is fatal for the session.
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Restore the terminal to the state it was in before `enter_raw_mode`
    fn exit_raw_mode(&mut self) -> io::Result<()>;

    /// Block until the next key press or resize
    fn read_event(&mut self) -> io::Result<TermEvent>;

    /// Wait at most `timeout` for the next key press or resize; `None` if nothing arrived
    fn read_event_timeout(&mut self, timeout: Duration) -> io::Result<Option<TermEvent>>;

    /// Current size as (rows, cols)
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Write one complete frame and flush it
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

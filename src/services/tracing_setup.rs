//! Log-file tracing.
//!
//! The terminal is in raw mode for the whole session, so diagnostics go to a file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// `kite.log` in the system temp directory
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("kite.log")
}

/// Install the global subscriber writing to `log_file`, filtered by `RUST_LOG`
/// (default `info`). Returns false if logging could not be set up; the editor runs
/// without it in that case.
pub fn init_global(log_file: &Path) -> bool {
    let file = match std::fs::File::create(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create log file {}: {}", log_file.display(), e);
            return false;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

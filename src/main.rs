use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use kite::config::Config;
use kite::services::fs::StdFileSystem;
use kite::services::terminal::CrosstermTerminal;
use kite::services::tracing_setup;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "kite")]
#[command(version)]
struct Cli {
    /// File to open; prompted for when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Ask for a file name on the cooked terminal; empty input means no file
fn prompt_for_filename() -> io::Result<Option<PathBuf>> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter filename (or just press enter): ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    Ok((!name.is_empty()).then(|| PathBuf::from(name)))
}

fn main() -> AnyhowResult<()> {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file);
    tracing::info!("Editor starting");

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(),
    };

    let file = match cli.file {
        Some(file) => Some(file),
        None => prompt_for_filename().context("Failed to read file name")?,
    };

    kite::run_session(CrosstermTerminal::new(), StdFileSystem, config, file)
        .context("Terminal error")?;
    Ok(())
}

//! Logging setup
//!
//! Line-oriented commands log to the terminal. The full-screen switcher
//! owns the terminal while it runs, so its log lines go to a file instead.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Commands;
use crate::config::Config;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// The caller-supplied terminal writer (stderr in the binary)
    Terminal,
    /// An append-only log file
    File(PathBuf),
}

impl LogSink {
    /// Sink for a command; `None` runs the TUI
    pub fn for_command(command: Option<&Commands>) -> Self {
        match command {
            None | Some(Commands::Tui(_)) => LogSink::File(Config::log_path()),
            Some(_) => LogSink::Terminal,
        }
    }
}

/// Build the subscriber for `folio_theme=<level>` writing to `sink`
///
/// `terminal` is only used for `LogSink::Terminal`.
pub fn subscriber(
    level: &str,
    sink: &LogSink,
    terminal: BoxMakeWriter,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let (writer, ansi) = match sink {
        LogSink::Terminal => (terminal, true),
        LogSink::File(path) => (BoxMakeWriter::new(Mutex::new(open_log(path)?)), false),
    };

    let filter = EnvFilter::from_default_env().add_directive(format!("folio_theme={level}").parse()?);

    Ok(tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer)
                .compact(),
        )
        .with(filter))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

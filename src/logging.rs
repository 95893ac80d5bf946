//! Tracing setup
//!
//! The TUI owns the terminal, so while it runs log output goes to a file.
//! One-shot commands log to stderr unless a file is configured.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;
use crate::env;
use crate::error::{PassfetchError, Result};

pub fn init(cli: &Cli) -> Result<()> {
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("passfetch={}", log_level).into());

    let (writer, ansi) = match log_destination(cli) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            console::colors_enabled_stderr(),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .try_init()
        .map_err(|e| PassfetchError::Logging(e.to_string()))
}

/// File to log to, or None for stderr
fn log_destination(cli: &Cli) -> Option<PathBuf> {
    cli.log_file
        .clone()
        .or_else(|| cli.is_tui().then(env::default_log_file))
}

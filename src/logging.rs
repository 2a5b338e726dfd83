//! Log output.
//!
//! Logs are written to the file passed with `--logfile`; without one,
//! nothing is recorded (the terminal belongs to the timer). The filter is
//! read from `POMODORO_LOG` and defaults to `info`.

use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const FILTER_ENV: &str = "POMODORO_LOG";

/// Installs the global subscriber, appending to `path`.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(io::Error::other)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

//! Command-line interface.
//!
//! With no subcommand, `pomodoro` starts the interactive timer. The
//! `history` subcommand prints the pomodoros recorded so far.
//!
//! Startup failures (log file, database, config) are reported as an error
//! message and end the process; nothing after startup is fatal.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, Overrides};
use crate::controller::Controller;
use crate::storage::{Recorder, Storage};
use crate::{logging, tui};

use format::format_record;

/// Pomodoro timer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "pomodoro", version, after_long_help = KEYS_HELP)]
pub struct Cli {
    /// File to log into. Nothing is logged when omitted.
    #[arg(long, global = true)]
    logfile: Option<PathBuf>,

    /// SQLite database file (defaults to `~/.config/pomodoro/pomodoro.db`).
    #[arg(long, global = true)]
    dbfile: Option<PathBuf>,

    /// Focus length, e.g. `25m`, `90s`, or a bare number of minutes.
    #[arg(long)]
    focus: Option<String>,

    /// Short break length.
    #[arg(long)]
    short_break: Option<String>,

    /// Long break length.
    #[arg(long)]
    long_break: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

const KEYS_HELP: &str = r"Keys:
  menu       ↑/↓ or k/j to choose, Enter or Space to start, q to quit
  running    Esc back to the menu (nothing is saved), q to quit
  finished   type a note, Backspace to erase, Enter to save and continue,
             Esc to discard and go back to the menu
  anywhere   Ctrl+C to quit

Every fourth completed focus is followed by a long break.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recorded pomodoros, most recent first.
    History {
        /// Maximum number of entries to show.
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Print JSON instead of one line per entry.
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    logging::init(cli.logfile.as_deref())
        .map_err(|e| format!("failed to set up logging: {e}"))?;
    tracing::info!("init start");

    let db_path = match cli.dbfile {
        Some(path) => path,
        None => Storage::default_path().ok_or("could not determine home directory")?,
    };
    let storage = Storage::open(&db_path)
        .map_err(|e| format!("failed to open {}: {e}", db_path.display()))?;

    match cli.command {
        Some(Command::History { limit, json }) => cmd_history(&storage, limit, json),
        None => {
            let overrides = Overrides {
                focus: cli.focus,
                short_break: cli.short_break,
                long_break: cli.long_break,
            };
            cmd_timer(storage, &overrides)
        }
    }
}

fn cmd_timer(storage: Storage, overrides: &Overrides) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    let durations = config.durations(overrides).map_err(|e| e.to_string())?;
    let recorder =
        Recorder::spawn(storage).map_err(|e| format!("failed to start recorder: {e}"))?;
    tracing::info!("init done");

    let result = tui::run(Controller::new(durations), &recorder)
        .map_err(|e| format!("terminal error: {e}"));

    recorder.shutdown();
    tracing::info!("exit");
    result
}

fn cmd_history(storage: &Storage, limit: usize, json: bool) -> Result<(), String> {
    let records = storage
        .list(limit)
        .map_err(|e| format!("failed to list pomodoros: {e}"))?;

    if json {
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| format!("failed to serialize history: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    if records.is_empty() {
        println!("No pomodoros recorded");
        return Ok(());
    }

    for record in &records {
        println!("{}", format_record(record));
    }

    Ok(())
}

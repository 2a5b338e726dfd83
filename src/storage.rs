//! Local persistence for finished pomodoros.
//!
//! Everything lives in one `SQLite` file with a single table, one row per
//! acknowledged phase:
//!
//! ```text
//! pomodoro (id TEXT PRIMARY KEY, type INTEGER, start TEXT, end TEXT, note TEXT)
//! ```
//!
//! Timestamps are stored as text in [`TIMESTAMP_FORMAT`](crate::model::TIMESTAMP_FORMAT).

mod pomodoro;
mod recorder;

use std::{fs, io, path::Path, path::PathBuf, time::Duration};

use rusqlite::Connection;

pub use recorder::{RecordSink, Recorder};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// How long a write waits on another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `SQLite`-backed store of finished pomodoros.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path` and makes sure the table exists.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the default database path: `~/.config/pomodoro/pomodoro.db`.
    pub fn default_path() -> Option<PathBuf> {
        crate::config::app_dir().map(|dir| dir.join("pomodoro.db"))
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"CREATE TABLE IF NOT EXISTS pomodoro (
            id    TEXT PRIMARY KEY,
            type  INTEGER NOT NULL,
            start TEXT NOT NULL,
            "end" TEXT NOT NULL,
            note  TEXT NOT NULL
        );"#,
    )?;
    Ok(())
}

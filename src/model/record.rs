//! Records of finished phases.

use jiff::Zoned;
use serde::Serialize;
use uuid::Uuid;

use super::PhaseKind;

/// Persisted timestamp layout, e.g. `2026-10-19T09:25:00 +0200`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S %z";

/// A finished phase, handed to storage once the user proceeds past it.
///
/// Owned outright by whoever holds it: the session gives it up when it
/// is handed off, so later edits can never reach it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PomodoroRecord {
    pub kind: PhaseKind,
    pub started_at: Zoned,
    pub ended_at: Zoned,
    pub note: String,
}

/// A record read back from storage, with its durable identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: PomodoroRecord,
}

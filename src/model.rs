//! Core data model for the timer.
//!
//! These types describe the Pomodoro cycle: the phases a session moves
//! through, how long each active phase lasts, and the record a finished
//! phase leaves behind.

mod phase;
mod record;

pub use phase::{Durations, DurationsError, Phase, PhaseKind};
pub use record::{PomodoroRecord, StoredRecord, TIMESTAMP_FORMAT};

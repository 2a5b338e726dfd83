//! Read-only view of a session for rendering.

use crate::model::{Durations, Phase, PhaseKind};

/// Everything a screen needs to draw the session, and nothing it could
/// use to change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    /// Seconds left in the running phase; zero outside one.
    pub remaining: u32,
    /// Highlighted menu row.
    pub cursor: usize,
    pub durations: &'a Durations,
    pub streak: u32,
    /// The phase Enter would start, shown on the done screen.
    pub upcoming: Option<PhaseKind>,
    /// The note being written on the done screen.
    pub note: Option<&'a str>,
}

impl Snapshot<'_> {
    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

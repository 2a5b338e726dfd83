//! Phase types: what the timer is doing right now.

use serde::Serialize;

/// One of the three timed phases of the cycle.
///
/// The integer code is what gets persisted in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseKind {
    /// Focused work.
    Focus,
    ShortBreak,
    LongBreak,
}

impl PhaseKind {
    /// All kinds in menu order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// The persisted integer code.
    pub fn code(self) -> i64 {
        match self {
            Self::Focus => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }

    /// Inverse of [`PhaseKind::code`].
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Focus),
            1 => Some(Self::ShortBreak),
            2 => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// The kind shown at a menu position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Pomodoro",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

/// Where the session stands.
///
/// Seven values: the idle menu, three running phases, and their three
/// completed counterparts awaiting acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No phase chosen; the user is picking one.
    SelectMenu,

    /// A phase is counting down.
    Active(PhaseKind),

    /// A phase has finished and waits for the user to proceed.
    Done(PhaseKind),
}

/// Invalid phase lengths.
#[derive(Debug, thiserror::Error)]
pub enum DurationsError {
    #[error("{0} duration must be at least one second")]
    NotPositive(&'static str),
}

/// Configured length of each active phase, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl Durations {
    /// Builds a set of durations, rejecting zero-length phases.
    pub fn new(focus: u32, short_break: u32, long_break: u32) -> Result<Self, DurationsError> {
        if focus == 0 {
            return Err(DurationsError::NotPositive(PhaseKind::Focus.label()));
        }
        if short_break == 0 {
            return Err(DurationsError::NotPositive(PhaseKind::ShortBreak.label()));
        }
        if long_break == 0 {
            return Err(DurationsError::NotPositive(PhaseKind::LongBreak.label()));
        }
        Ok(Self {
            focus,
            short_break,
            long_break,
        })
    }

    /// Length of a phase in seconds.
    pub fn get(&self, kind: PhaseKind) -> u32 {
        match kind {
            PhaseKind::Focus => self.focus,
            PhaseKind::ShortBreak => self.short_break,
            PhaseKind::LongBreak => self.long_break,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: 25 * 60,
            short_break: 5 * 60,
            long_break: 15 * 60,
        }
    }
}

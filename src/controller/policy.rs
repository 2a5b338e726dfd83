//! Which phase follows a finished one.

use crate::model::PhaseKind;

/// Focus phases completed between long breaks.
pub const LONG_BREAK_EVERY: u32 = 4;

/// Picks the phase that follows `finished`, given the streak after it.
///
/// Every fourth completed Focus earns a long break. A zero streak never
/// does, so no long break can come before any work.
pub fn next_phase(finished: PhaseKind, streak: u32) -> PhaseKind {
    match finished {
        PhaseKind::Focus => {
            if streak > 0 && streak % LONG_BREAK_EVERY == 0 {
                PhaseKind::LongBreak
            } else {
                PhaseKind::ShortBreak
            }
        }
        PhaseKind::ShortBreak | PhaseKind::LongBreak => PhaseKind::Focus,
    }
}

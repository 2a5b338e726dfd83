//! One-second tick scheduling.

use std::time::{Duration, Instant};

use crate::controller::TickToken;

/// Interval between countdown ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// How long to wait for input when no tick is pending.
const IDLE_WAIT: Duration = Duration::from_secs(60);

/// Holds at most one pending tick.
///
/// Scheduling replaces whatever was pending. A tick that continues the
/// countdown of the tick that just fired (same token) is measured from that
/// tick's deadline rather than from "now", so rendering and event handling
/// don't make the countdown drift.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<(Instant, TickToken)>,
    last_fired: Option<(Instant, TickToken)>,
}

impl TickScheduler {
    pub fn schedule(&mut self, token: TickToken, now: Instant) {
        let base = match self.last_fired.take() {
            Some((deadline, fired)) if fired == token => deadline,
            _ => now,
        };
        self.pending = Some((base + TICK, token));
    }

    /// Takes the pending tick if its deadline has passed.
    pub fn due(&mut self, now: Instant) -> Option<TickToken> {
        match self.pending {
            Some((deadline, token)) if deadline <= now => {
                self.pending = None;
                self.last_fired = Some((deadline, token));
                Some(token)
            }
            _ => None,
        }
    }

    /// How long the host may block waiting for input.
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.pending {
            Some((deadline, _)) => deadline.saturating_duration_since(now),
            None => IDLE_WAIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_when_idle() {
        let mut ticks = TickScheduler::default();
        let now = Instant::now();
        assert_eq!(ticks.due(now + TICK * 10), None);
        assert_eq!(ticks.timeout(now), IDLE_WAIT);
    }

    #[test]
    fn tick_fires_once_after_a_second() {
        let mut ticks = TickScheduler::default();
        let now = Instant::now();
        let token = TickToken::default();
        ticks.schedule(token, now);

        assert_eq!(ticks.due(now), None);
        assert_eq!(ticks.timeout(now), TICK);
        assert_eq!(ticks.due(now + TICK), Some(token));
        assert_eq!(ticks.due(now + TICK * 2), None);
    }

    #[test]
    fn rescheduling_after_a_tick_does_not_drift() {
        let mut ticks = TickScheduler::default();
        let start = Instant::now();
        let token = TickToken::default();
        ticks.schedule(token, start);

        // Handled 300ms late; the next deadline is still start + 2s.
        let late = start + TICK + Duration::from_millis(300);
        assert_eq!(ticks.due(late), Some(token));
        ticks.schedule(token, late);
        assert_eq!(ticks.timeout(late), Duration::from_millis(700));
    }

    #[test]
    fn new_phase_is_measured_from_now() {
        let mut ticks = TickScheduler::default();
        let start = Instant::now();
        let first = TickToken::default();
        ticks.schedule(first, start);
        assert_eq!(ticks.due(start + TICK), Some(first));

        // The phase ended on that tick; a new one starts half a second later.
        let later = start + TICK + Duration::from_millis(500);
        let second = first.next();
        ticks.schedule(second, later);
        assert_eq!(ticks.timeout(later), TICK);
    }

    #[test]
    fn fresh_schedule_replaces_pending_tick() {
        let mut ticks = TickScheduler::default();
        let now = Instant::now();
        let first = TickToken::default();
        ticks.schedule(first, now);
        let later = now + Duration::from_millis(500);
        ticks.schedule(first.next(), later);

        assert_eq!(ticks.due(now + TICK), None);
        assert_eq!(ticks.due(later + TICK), Some(first.next()));
    }
}

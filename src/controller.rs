//! Phase controller: the Pomodoro state machine.
//!
//! The controller owns all session state and advances it one event at a
//! time. It performs no I/O of its own. Anything the outside world must do
//! (wake it up in a second, store a finished record, stop the program)
//! comes back from [`Controller::update`] as an [`Effect`].

mod note;
mod policy;
mod snapshot;

use std::mem;

use jiff::Zoned;

use crate::model::{Durations, Phase, PhaseKind, PomodoroRecord};

pub use note::Note;
pub use policy::next_phase;
pub use snapshot::{Snapshot, format_clock};

/// Identifies the ticks requested for one run of a phase.
///
/// A fresh token is minted every time a phase starts, so a tick that was
/// scheduled for an earlier phase can be recognized and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickToken(u64);

impl TickToken {
    /// The token after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A key press, already decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    Backspace,
    Char(char),
}

/// Inbound events, delivered one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),

    /// One second has passed since the tick with this token was requested.
    Tick(TickToken),

    /// The host wants to stop (e.g. Ctrl+C).
    Quit,
}

/// Requests for the host, in the order they should be carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver `Event::Tick` with this token in one second.
    ScheduleTick(TickToken),

    /// Store a finished record. Fire-and-forget: the outcome is never
    /// reported back.
    Persist(PomodoroRecord),

    /// A phase just ran out; ring the terminal bell.
    Bell,

    /// Shut down.
    Exit,
}

/// Session state, with the in-progress record carried by the stage it
/// belongs to.
#[derive(Debug)]
enum Stage {
    Menu {
        cursor: usize,
    },
    Running {
        kind: PhaseKind,
        remaining: u32,
        started_at: Zoned,
    },
    Finished {
        kind: PhaseKind,
        started_at: Zoned,
        ended_at: Zoned,
        note: Note,
    },
}

impl Stage {
    fn menu() -> Self {
        Self::Menu { cursor: 0 }
    }
}

/// The Pomodoro state machine.
#[derive(Debug)]
pub struct Controller {
    stage: Stage,
    durations: Durations,
    streak: u32,
    tick: TickToken,
}

impl Controller {
    /// A fresh session sitting at the menu.
    pub fn new(durations: Durations) -> Self {
        Self {
            stage: Stage::menu(),
            durations,
            streak: 0,
            tick: TickToken::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.stage {
            Stage::Menu { .. } => Phase::SelectMenu,
            Stage::Running { kind, .. } => Phase::Active(*kind),
            Stage::Finished { kind, .. } => Phase::Done(*kind),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (remaining, cursor, upcoming, note) = match &self.stage {
            Stage::Menu { cursor } => (0, *cursor, None, None),
            Stage::Running { remaining, .. } => (*remaining, 0, None, None),
            Stage::Finished { kind, note, .. } => (
                0,
                0,
                Some(next_phase(*kind, self.streak)),
                Some(note.as_str()),
            ),
        };
        Snapshot {
            phase: self.phase(),
            remaining,
            cursor,
            durations: &self.durations,
            streak: self.streak,
            upcoming,
            note,
        }
    }

    /// Applies one event and returns what the host must do next.
    ///
    /// `now` is the wall-clock time the event is handled at; it stamps the
    /// start and end of records.
    pub fn update(&mut self, event: Event, now: &Zoned) -> Vec<Effect> {
        match event {
            Event::Quit => self.quit(),
            Event::Tick(token) => self.on_tick(token, now),
            Event::Key(key) => match self.phase() {
                Phase::SelectMenu => self.on_menu_key(key, now),
                Phase::Active(_) => self.on_running_key(key),
                Phase::Done(_) => self.on_finished_key(key, now),
            },
        }
    }

    fn on_menu_key(&mut self, key: Key, now: &Zoned) -> Vec<Effect> {
        let Stage::Menu { cursor } = &mut self.stage else {
            return Vec::new();
        };
        match key {
            Key::Up | Key::Char('k') => *cursor = cursor.saturating_sub(1),
            Key::Down | Key::Char('j') => {
                *cursor = (*cursor + 1).min(PhaseKind::ALL.len() - 1);
            }
            Key::Enter | Key::Char(' ') => {
                let kind = PhaseKind::from_index(*cursor).unwrap_or(PhaseKind::Focus);
                return self.start(kind, now);
            }
            Key::Char('q') => return self.quit(),
            _ => {}
        }
        Vec::new()
    }

    fn on_running_key(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Esc => {
                self.cancel();
                Vec::new()
            }
            Key::Char('q') => self.quit(),
            _ => Vec::new(),
        }
    }

    fn on_finished_key(&mut self, key: Key, now: &Zoned) -> Vec<Effect> {
        match key {
            Key::Enter => return self.proceed(now),
            Key::Esc => self.cancel(),
            Key::Backspace => {
                if let Stage::Finished { note, .. } = &mut self.stage {
                    note.pop();
                }
            }
            Key::Char(c) if !c.is_control() => {
                if let Stage::Finished { note, .. } = &mut self.stage {
                    note.push(c);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_tick(&mut self, token: TickToken, now: &Zoned) -> Vec<Effect> {
        if token != self.tick {
            tracing::debug!("stale tick ignored");
            return Vec::new();
        }
        let Stage::Running { remaining, .. } = &mut self.stage else {
            return Vec::new();
        };
        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return vec![Effect::ScheduleTick(self.tick)];
        }
        self.finish(now)
    }

    /// Begins a phase with a fresh record stamped `now`.
    fn start(&mut self, kind: PhaseKind, now: &Zoned) -> Vec<Effect> {
        let remaining = self.durations.get(kind);
        self.stage = Stage::Running {
            kind,
            remaining,
            started_at: now.clone(),
        };
        self.tick = self.tick.next();
        tracing::info!(phase = kind.label(), seconds = remaining, "start");
        vec![Effect::ScheduleTick(self.tick)]
    }

    /// The countdown hit zero.
    fn finish(&mut self, now: &Zoned) -> Vec<Effect> {
        let Stage::Running {
            kind, started_at, ..
        } = mem::replace(&mut self.stage, Stage::menu())
        else {
            return Vec::new();
        };
        if kind == PhaseKind::Focus {
            self.streak += 1;
        }
        // A clock stepping backwards must not produce an end before the start.
        let ended_at = if now.timestamp() < started_at.timestamp() {
            started_at.clone()
        } else {
            now.clone()
        };
        tracing::info!(phase = kind.label(), streak = self.streak, "end");
        self.stage = Stage::Finished {
            kind,
            started_at,
            ended_at,
            note: Note::new(),
        };
        vec![Effect::Bell]
    }

    /// Hands the finished record off and starts whatever comes next.
    fn proceed(&mut self, now: &Zoned) -> Vec<Effect> {
        let Stage::Finished {
            kind,
            started_at,
            ended_at,
            note,
        } = mem::replace(&mut self.stage, Stage::menu())
        else {
            return Vec::new();
        };
        let record = PomodoroRecord {
            kind,
            started_at,
            ended_at,
            note: note.into_string(),
        };
        let mut effects = vec![Effect::Persist(record)];
        effects.extend(self.start(next_phase(kind, self.streak), now));
        effects
    }

    /// Back to the menu. Any in-progress record is dropped unsaved.
    fn cancel(&mut self) {
        tracing::info!(phase = ?self.phase(), "escape");
        self.stage = Stage::menu();
    }

    fn quit(&self) -> Vec<Effect> {
        tracing::info!(phase = ?self.phase(), "quit");
        vec![Effect::Exit]
    }
}

//! Application loop: events in, effects out.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal::SetTitle};
use jiff::Zoned;
use ratatui::DefaultTerminal;

use crate::controller::{Controller, Effect, Event, Key};
use crate::storage::RecordSink;

use super::screens;
use super::ticks::TickScheduler;

/// Runs the timer until the user quits.
///
/// Finished records go to `sink` without waiting on the write.
pub fn run(controller: Controller, sink: &impl RecordSink) -> io::Result<()> {
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), SetTitle("Pomodoro 🍅")) {
        tracing::warn!(error = %e, "could not set window title");
    }
    let result = event_loop(&mut terminal, controller, sink);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut controller: Controller,
    sink: &impl RecordSink,
) -> io::Result<()> {
    let mut ticks = TickScheduler::default();

    loop {
        terminal.draw(|frame| screens::render(frame, &controller.snapshot()))?;

        let event = if let Some(token) = ticks.due(Instant::now()) {
            Event::Tick(token)
        } else {
            if !event::poll(ticks.timeout(Instant::now()))? {
                continue;
            }
            match translate(&event::read()?) {
                Some(event) => event,
                None => continue,
            }
        };

        for effect in controller.update(event, &Zoned::now()) {
            match effect {
                Effect::ScheduleTick(token) => ticks.schedule(token, Instant::now()),
                Effect::Persist(record) => sink.submit(record),
                Effect::Bell => ring_bell(),
                Effect::Exit => return Ok(()),
            }
        }
    }
}

/// Maps a terminal event to a controller event. Anything unmapped is
/// dropped here; resizes just cause a redraw.
fn translate(event: &TermEvent) -> Option<Event> {
    let TermEvent::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Event::Quit);
    }
    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(Event::Key(key))
}

fn ring_bell() {
    let mut out = io::stdout();
    if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "could not ring bell");
    }
}

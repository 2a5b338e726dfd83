//! Screen rendering.
//!
//! Screens are pure functions of a [`Snapshot`]: they read it and draw,
//! nothing else.

mod countdown;
mod done;
mod menu;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::controller::Snapshot;
use crate::model::Phase;

/// Draws whichever screen matches the snapshot's phase.
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // title
        Constraint::Min(0),    // body
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    match snapshot.phase {
        Phase::SelectMenu => menu::render(frame, &chunks, snapshot),
        Phase::Active(kind) => countdown::render(frame, &chunks, kind, snapshot),
        Phase::Done(kind) => done::render(frame, &chunks, kind, snapshot),
    }
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn render_title(frame: &mut Frame, area: Rect, title: Line) {
    let title = Paragraph::new(title).block(Block::default().padding(Padding::new(2, 0, 1, 0)));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(text.to_string(), muted())));
    frame.render_widget(help, area);
}

fn body_block() -> Block<'static> {
    Block::default().padding(Padding::new(2, 2, 0, 0))
}

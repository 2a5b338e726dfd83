//! Countdown screen for a running phase.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::Snapshot;
use crate::model::PhaseKind;

use super::{body_block, highlight, muted, render_help, render_title};

pub(super) fn render(frame: &mut Frame, chunks: &[Rect], kind: PhaseKind, snapshot: &Snapshot) {
    let message = match kind {
        PhaseKind::Focus => "Focus!",
        PhaseKind::ShortBreak | PhaseKind::LongBreak => "Chill.",
    };
    render_title(
        frame,
        chunks[0],
        Line::from(vec![
            Span::styled(message, highlight()),
            Span::styled(
                format!(" {} remaining", snapshot.clock()),
                Style::default().fg(Color::Gray),
            ),
        ]),
    );

    let lines = vec![Line::from(Span::styled(
        format!("{}  ·  streak: {}", kind.label(), snapshot.streak),
        muted(),
    ))];
    frame.render_widget(Paragraph::new(lines).block(body_block()), chunks[1]);

    render_help(frame, chunks[2], " esc back to menu  q quit");
}

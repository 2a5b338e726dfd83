//! Done screen: celebrate, take a note, show what's next.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::controller::Snapshot;
use crate::model::PhaseKind;

use super::{body_block, highlight, muted, render_help, render_title};

pub(super) fn render(frame: &mut Frame, chunks: &[Rect], kind: PhaseKind, snapshot: &Snapshot) {
    let title = match kind {
        PhaseKind::Focus => Line::from(vec![
            Span::styled(
                "Pomodoro complete ✅",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" Good job! (streak: {})", snapshot.streak)),
        ]),
        PhaseKind::ShortBreak | PhaseKind::LongBreak => Line::from(Span::styled(
            "Chilled out and ready for the next one!",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    };
    render_title(frame, chunks[0], title);

    let mut lines = vec![Line::from(vec![
        Span::styled("Note: ", muted()),
        Span::raw(snapshot.note.unwrap_or_default().to_string()),
        Span::styled("▏", highlight()),
    ])];
    if let Some(next) = snapshot.upcoming {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw("Upcoming: "),
            Span::styled(next.label(), highlight()),
            Span::styled(" [Enter to proceed...]", muted()),
        ]));
    }
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(body_block());
    frame.render_widget(body, chunks[1]);

    render_help(
        frame,
        chunks[2],
        " type a note  ⏎ save & continue  esc discard  ctrl+c quit",
    );
}

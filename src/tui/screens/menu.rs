//! Menu screen: pick a phase to start.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};

use crate::controller::{Snapshot, format_clock};
use crate::model::PhaseKind;

use super::{body_block, highlight, render_help, render_title};

pub(super) fn render(frame: &mut Frame, chunks: &[Rect], snapshot: &Snapshot) {
    render_title(
        frame,
        chunks[0],
        Line::from(Span::styled(
            "Pomodoro Timer 🍅",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    );

    let normal = Style::default().fg(Color::Gray);
    let items: Vec<ListItem> = PhaseKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == snapshot.cursor;
            let style = if selected { highlight() } else { normal };
            let pointer = if selected { "› " } else { "  " };
            let length = format_length(snapshot.durations.get(*kind));
            ListItem::new(Line::from(vec![
                Span::styled(pointer, style),
                Span::styled(format!("{:<12}", kind.label()), style),
                Span::styled(format!("({length})"), style),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(body_block()), chunks[1]);

    render_help(frame, chunks[2], " ↑↓ choose  ⏎ start  q quit");
}

/// Phase length for the menu: whole minutes, or `MM:SS` when uneven.
fn format_length(seconds: u32) -> String {
    if seconds % 60 == 0 {
        format!("{} min", seconds / 60)
    } else {
        format_clock(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Durations, Phase};
    use crate::tui::screens::testing::rendered;

    fn menu_snapshot(durations: &Durations, cursor: usize) -> Snapshot<'_> {
        Snapshot {
            phase: Phase::SelectMenu,
            remaining: 0,
            cursor,
            durations,
            streak: 0,
            upcoming: None,
            note: None,
        }
    }

    #[test]
    fn lists_all_phases_with_lengths() {
        let durations = Durations::default();
        let text = rendered(&menu_snapshot(&durations, 0));

        assert!(text.contains("Pomodoro Timer"));
        assert!(text.contains("Pomodoro    (25 min)"));
        assert!(text.contains("Short Break (5 min)"));
        assert!(text.contains("Long Break  (15 min)"));
    }

    #[test]
    fn pointer_follows_cursor() {
        let durations = Durations::default();
        let text = rendered(&menu_snapshot(&durations, 1));

        assert!(text.contains("› Short Break"));
        assert!(!text.contains("› Pomodoro"));
    }

    #[test]
    fn uneven_lengths_show_seconds() {
        assert_eq!(format_length(1500), "25 min");
        assert_eq!(format_length(90), "01:30");
    }
}

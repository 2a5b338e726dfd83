//! Output formatting for CLI display.

use crate::model::StoredRecord;

/// One history line: short id, time span, kind, length, note.
pub(super) fn format_record(stored: &StoredRecord) -> String {
    let record = &stored.record;
    let short_id = &stored.id.to_string()[..8];
    let start = record.started_at.strftime("%Y-%m-%d %H:%M");
    let end = record.ended_at.strftime("%H:%M");
    let minutes = (record.ended_at.timestamp().as_second()
        - record.started_at.timestamp().as_second())
        / 60;

    let mut line = format!(
        "{short_id}  {start}-{end}  {:<11}  {minutes:>3} min",
        record.kind.label()
    );
    if !record.note.is_empty() {
        line.push_str("  ");
        line.push_str(&record.note);
    }
    line
}

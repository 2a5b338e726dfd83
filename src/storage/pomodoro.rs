//! Pomodoro rows: insert finished records, list them back.

use jiff::Zoned;
use uuid::Uuid;

use crate::model::{PhaseKind, PomodoroRecord, StoredRecord, TIMESTAMP_FORMAT};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Inserts one finished record under a freshly generated id.
    pub fn insert(&self, record: &PomodoroRecord) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.conn.execute(
            r#"INSERT INTO pomodoro (id, type, start, "end", note)
             VALUES (?1, ?2, ?3, ?4, ?5)"#,
            rusqlite::params![
                id.to_string(),
                record.kind.code(),
                record.started_at.strftime(TIMESTAMP_FORMAT).to_string(),
                record.ended_at.strftime(TIMESTAMP_FORMAT).to_string(),
                &record.note,
            ],
        )?;
        Ok(id)
    }

    /// Lists the most recent records first, at most `limit` of them.
    pub fn list(&self, limit: usize) -> Result<Vec<StoredRecord>> {
        let mut stmt = self
            .conn
            .prepare(r#"SELECT id, type, start, "end", note FROM pomodoro"#)?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, code, start, end, note) = row?;
            records.push(parse_row(&id, code, &start, &end, note)?);
        }
        // Stored text sorts badly across offsets; compare instants instead.
        records.sort_by(|a, b| {
            b.record
                .started_at
                .timestamp()
                .cmp(&a.record.started_at.timestamp())
        });
        records.truncate(limit);
        Ok(records)
    }
}

fn parse_row(id: &str, code: i64, start: &str, end: &str, note: String) -> Result<StoredRecord> {
    let id = id
        .parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid id: {e}")))?;
    let kind = PhaseKind::from_code(code)
        .ok_or_else(|| StorageError::Corrupt(format!("unknown type code: {code}")))?;
    Ok(StoredRecord {
        id,
        record: PomodoroRecord {
            kind,
            started_at: parse_timestamp(start, "start")?,
            ended_at: parse_timestamp(end, "end")?,
            note,
        },
    })
}

fn parse_timestamp(text: &str, column: &str) -> Result<Zoned> {
    Zoned::strptime(TIMESTAMP_FORMAT, text)
        .map_err(|e| StorageError::Corrupt(format!("invalid {column} timestamp {text:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::{Timestamp, tz};
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path().join("pomodoro.db")).unwrap();
        (dir, storage)
    }

    fn at(second: i64, offset_hours: i8) -> Zoned {
        Timestamp::from_second(second)
            .unwrap()
            .to_zoned(tz::TimeZone::fixed(tz::offset(offset_hours)))
    }

    fn sample_record() -> PomodoroRecord {
        PomodoroRecord {
            kind: PhaseKind::Focus,
            started_at: at(1_700_000_000, -7),
            ended_at: at(1_700_001_500, -7),
            note: "wrote the parser".into(),
        }
    }

    #[test]
    fn insert_writes_fixed_format_row() {
        let (_dir, storage) = test_storage();
        let id = storage.insert(&sample_record()).unwrap();

        let (stored_id, code, start, end, note) = storage
            .conn
            .query_row(
                r#"SELECT id, type, start, "end", note FROM pomodoro"#,
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .unwrap();

        assert_eq!(stored_id, id.to_string());
        assert_eq!(code, 0);
        assert_eq!(start, "2023-11-14T15:13:20 -0700");
        assert_eq!(end, "2023-11-14T15:38:20 -0700");
        assert_eq!(note, "wrote the parser");
    }

    #[test]
    fn each_insert_gets_a_new_id() {
        let (_dir, storage) = test_storage();
        let record = sample_record();

        let first = storage.insert(&record).unwrap();
        let second = storage.insert(&record).unwrap();

        assert_ne!(first, second);
        assert_eq!(storage.list(10).unwrap().len(), 2);
    }

    #[test]
    fn list_empty() {
        let (_dir, storage) = test_storage();
        assert!(storage.list(10).unwrap().is_empty());
    }

    #[test]
    fn list_returns_most_recent_first_and_respects_limit() {
        let (_dir, storage) = test_storage();

        let mut older = sample_record();
        older.note = "older".into();
        let mut newer = sample_record();
        newer.kind = PhaseKind::ShortBreak;
        // Later instant written with a smaller offset, so text order disagrees.
        newer.started_at = at(1_700_003_600, -9);
        newer.ended_at = at(1_700_003_900, -9);
        newer.note = "newer".into();

        storage.insert(&older).unwrap();
        storage.insert(&newer).unwrap();

        let all = storage.list(10).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].record.note, "newer");
        assert_eq!(all[0].record.kind, PhaseKind::ShortBreak);
        assert_eq!(all[1].record.note, "older");

        let limited = storage.list(1).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].record.note, "newer");
    }

    #[test]
    fn list_round_trips_instants() {
        let (_dir, storage) = test_storage();
        let record = sample_record();
        let id = storage.insert(&record).unwrap();

        let stored = &storage.list(1).unwrap()[0];
        assert_eq!(stored.id, id);
        assert_eq!(
            stored.record.started_at.timestamp(),
            record.started_at.timestamp()
        );
        assert_eq!(
            stored.record.ended_at.timestamp(),
            record.ended_at.timestamp()
        );
    }

    #[test]
    fn list_rejects_unknown_type_code() {
        let (_dir, storage) = test_storage();
        storage
            .conn
            .execute(
                r#"INSERT INTO pomodoro (id, type, start, "end", note)
                 VALUES (?1, 9, '2023-11-14T15:13:20 -0700', '2023-11-14T15:38:20 -0700', '')"#,
                [Uuid::new_v4().to_string()],
            )
            .unwrap();

        let err = storage.list(10).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}

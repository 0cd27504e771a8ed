//! CSV codec for the record table.
//!
//! Layout: `date,morning,afternoon,evening,total`, header row required.
//! Shared by the store, the CSV export and `import`.

use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, RecordTable, SlotCounts};
use crate::utils::date::parse_stored_date;
use serde::Deserialize;
use std::io::{Read, Write};
use tracing::warn;

/// Row as it appears on disk, before normalization.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    morning: u32,
    afternoon: u32,
    evening: u32,
    #[serde(default)]
    total: Option<u32>,
}

/// Parses rows exactly as listed, without merging or sorting.
///
/// A missing `total` is derived; a present one is kept as written. Used for
/// tables the user edited by hand, which go through the overwrite path.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<DailyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();

    for row in rdr.deserialize::<RawRow>() {
        let raw = row?;

        let date =
            parse_stored_date(&raw.date).ok_or_else(|| AppError::InvalidDate(raw.date.clone()))?;
        let counts = SlotCounts::new(raw.morning, raw.afternoon, raw.evening);
        let mut record =
            DailyRecord::from_counts(date, counts).ok_or(AppError::CountOverflow(date))?;

        if let Some(stored) = raw.total {
            record.total = stored;
        }

        rows.push(record);
    }

    Ok(rows)
}

/// Parses a table from CSV and normalizes it.
///
/// Totals are re-derived, rows sharing a date are folded into one by adding
/// their slots, and the result is sorted by date.
pub fn read_csv<R: Read>(reader: R) -> AppResult<RecordTable> {
    let mut table = RecordTable::new();

    for (idx, row) in read_rows(reader)?.into_iter().enumerate() {
        let line = idx + 2;
        let date = row.date;

        if let Some(existing) = table.get_mut(date) {
            warn!(%date, line, "duplicate date in data file, adding slots together");
            let merged = existing
                .counts()
                .checked_add(&row.counts())
                .ok_or(AppError::CountOverflow(date))?;
            *existing =
                DailyRecord::from_counts(date, merged).ok_or(AppError::CountOverflow(date))?;
            continue;
        }

        let record =
            DailyRecord::from_counts(date, row.counts()).ok_or(AppError::CountOverflow(date))?;

        if record.total != row.total {
            warn!(%date, line, stored = row.total, derived = record.total, "stale total, recomputed");
        }

        table.push(record);
    }

    table.sort_by_date();
    Ok(table)
}

/// Writes `table` as CSV. The header row is written even for an empty table.
pub fn write_csv<W: Write>(writer: W, table: &RecordTable) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(RecordTable::COLUMNS)?;

    for record in table {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

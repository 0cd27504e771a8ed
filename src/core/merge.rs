//! The two ways a table changes.
//!
//! `Submit` adds deltas to one day and never loses what was there before.
//! `Overwrite` replaces the whole table with the caller's version.

use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, RecordTable, SlotCounts};
use chrono::NaiveDate;
use std::fmt;

/// Deltas for one day, added on top of any existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub date: NaiveDate,
    pub counts: SlotCounts,
}

impl Submission {
    pub fn new(date: NaiveDate, counts: SlotCounts) -> Self {
        Self { date, counts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Incremental submit: additive merge into the row for one date.
    Submit(Submission),
    /// Bulk overwrite: the given table becomes the whole table.
    Overwrite(RecordTable),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Submit(_) => "submit",
            Mutation::Overwrite(_) => "overwrite",
        }
    }
}

/// Non-blocking conditions raised while merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// All three deltas were zero; the record is still saved.
    ZeroValue(NaiveDate),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ZeroValue(d) => write!(f, "Total for {d} is 0, saving it anyway"),
        }
    }
}

/// Result of a merge: the new table plus any warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub table: RecordTable,
    pub warnings: Vec<Warning>,
}

pub fn apply(table: &RecordTable, mutation: &Mutation) -> AppResult<Merged> {
    match mutation {
        Mutation::Submit(sub) => submit(table, sub),
        Mutation::Overwrite(edited) => overwrite(edited).map(|table| Merged {
            table,
            warnings: Vec::new(),
        }),
    }
}

/// Adds `sub` to the row for its date, creating the row when missing.
///
/// The input table is left untouched; the returned table is sorted by date.
pub fn submit(table: &RecordTable, sub: &Submission) -> AppResult<Merged> {
    let mut next = table.clone();
    let mut warnings = Vec::new();

    if sub.counts.is_zero() {
        warnings.push(Warning::ZeroValue(sub.date));
    }

    let overflow = || AppError::CountOverflow(sub.date);

    match next.get_mut(sub.date) {
        Some(row) => {
            let counts = row.counts().checked_add(&sub.counts).ok_or_else(overflow)?;
            *row = DailyRecord::from_counts(sub.date, counts).ok_or_else(overflow)?;
        }
        None => {
            let row = DailyRecord::from_counts(sub.date, sub.counts).ok_or_else(overflow)?;
            next.push(row);
        }
    }

    next.sort_by_date();
    Ok(Merged {
        table: next,
        warnings,
    })
}

/// Takes `edited` as the new table, re-deriving every total.
///
/// Rows missing from `edited` are gone. A date listed twice is rejected.
pub fn overwrite(edited: &RecordTable) -> AppResult<RecordTable> {
    if let Some(dup) = edited.first_duplicate() {
        return Err(AppError::DuplicateDate(dup));
    }

    let mut next = edited.clone();
    for row in next.records_mut() {
        row.recompute_total()
            .ok_or(AppError::CountOverflow(row.date))?;
    }

    next.sort_by_date();
    Ok(next)
}

/// Full-value edit of one row, expressed as an overwrite of the whole table.
pub fn with_row(table: &RecordTable, date: NaiveDate, counts: SlotCounts) -> AppResult<Mutation> {
    let row = DailyRecord::from_counts(date, counts).ok_or(AppError::CountOverflow(date))?;

    let mut edited = table.clone();
    match edited.get_mut(date) {
        Some(existing) => *existing = row,
        None => edited.push(row),
    }

    Ok(Mutation::Overwrite(edited))
}

/// Removal of one row, expressed as an overwrite of the whole table.
pub fn without_row(table: &RecordTable, date: NaiveDate) -> AppResult<Mutation> {
    let mut edited = table.clone();
    edited
        .remove(date)
        .ok_or(AppError::NoRecordForDate(date))?;

    Ok(Mutation::Overwrite(edited))
}

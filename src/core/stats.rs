//! Read-only aggregates over the record table. Nothing here is persisted.

use crate::models::{RecordTable, Slot};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// A day's total together with its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlotMaxima {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
}

impl SlotMaxima {
    pub fn get(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Morning => self.morning,
            Slot::Afternoon => self.afternoon,
            Slot::Evening => self.evening,
        }
    }
}

/// Sum of totals for one ISO week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyTotal {
    pub week: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: u64,
    pub record_days: usize,
    pub daily_average: f64,
    pub best: Option<DayTotal>,
    pub worst: Option<DayTotal>,
    pub slot_max: SlotMaxima,
    pub weekly: Vec<WeeklyTotal>,
}

impl Statistics {
    pub fn compute(table: &RecordTable) -> Self {
        let total = grand_total(table);
        let record_days = table.len();

        Self {
            total,
            record_days,
            daily_average: daily_average(total, record_days),
            best: best_day(table),
            worst: worst_day(table),
            slot_max: slot_maxima(table),
            weekly: weekly_totals(table),
        }
    }
}

pub fn grand_total(table: &RecordTable) -> u64 {
    table.iter().map(|r| u64::from(r.total)).sum()
}

/// `total / days`, or 0 when there are no days.
pub fn daily_average(total: u64, days: usize) -> f64 {
    if days == 0 {
        0.0
    } else {
        total as f64 / days as f64
    }
}

/// Highest total; ties resolve to the first row in table order.
pub fn best_day(table: &RecordTable) -> Option<DayTotal> {
    let max = table.iter().map(|r| r.total).max()?;
    first_with_total(table, max)
}

/// Lowest total; ties resolve to the first row in table order.
pub fn worst_day(table: &RecordTable) -> Option<DayTotal> {
    let min = table.iter().map(|r| r.total).min()?;
    first_with_total(table, min)
}

fn first_with_total(table: &RecordTable, total: u32) -> Option<DayTotal> {
    table
        .iter()
        .find(|r| r.total == total)
        .map(|r| DayTotal {
            date: r.date,
            total: r.total,
        })
}

pub fn slot_maxima(table: &RecordTable) -> SlotMaxima {
    let max_of = |slot: Slot| table.iter().map(|r| r.slot(slot)).max().unwrap_or(0);

    SlotMaxima {
        morning: max_of(Slot::Morning),
        afternoon: max_of(Slot::Afternoon),
        evening: max_of(Slot::Evening),
    }
}

/// Totals grouped by ISO week number, ascending by week number.
///
/// Only the week number is used as key: December 29-31 can fall in week 1
/// of the following ISO year and then sort first.
pub fn weekly_totals(table: &RecordTable) -> Vec<WeeklyTotal> {
    let mut weeks: BTreeMap<u32, u64> = BTreeMap::new();

    for r in table {
        *weeks.entry(r.date.iso_week().week()).or_default() += u64::from(r.total);
    }

    weeks
        .into_iter()
        .map(|(week, total)| WeeklyTotal { week, total })
        .collect()
}

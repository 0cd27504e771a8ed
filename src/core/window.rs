//! Date window accepted for incremental submissions.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// Inclusive date range; incremental submits outside it are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl SubmitWindow {
    /// December 1st to 31st of `year`.
    pub fn december(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 12, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self { start, end })
    }

    /// December of the current local year.
    pub fn current() -> AppResult<Self> {
        let year = date::today().year();
        Self::december(year).ok_or_else(|| AppError::Other(format!("no December in year {year}")))
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    pub fn check(&self, d: NaiveDate) -> AppResult<()> {
        if self.contains(d) {
            Ok(())
        } else {
            Err(AppError::OutOfRange {
                date: d,
                start: self.start,
                end: self.end,
            })
        }
    }
}

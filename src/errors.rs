//! Unified application error type.
//! Store, merger, session, export and CLI all return AppError so that every
//! failure reaches `main` as one printable message.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Failed to load records from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Failed to save records to {path}: {reason}")]
    Save { path: String, reason: String },

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date {date} is outside the accepted range {start} .. {end}")]
    OutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Date {0} appears more than once in the edited table")]
    DuplicateDate(NaiveDate),

    #[error("Count overflow while updating {0}")]
    CountOverflow(NaiveDate),

    #[error("No record found for date {0}")]
    NoRecordForDate(NaiveDate),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export / editor
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Editor error: {0}")]
    Editor(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors raised by input validation, before any state change.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::OutOfRange { .. }
                | AppError::DuplicateDate(_)
                | AppError::CountOverflow(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

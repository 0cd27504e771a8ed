// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::delimited::{export_csv, export_json};
use crate::export::fs_utils::ensure_writable;
use crate::export::xlsx::export_xlsx;
use crate::models::RecordTable;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of generated export file names.
pub const EXPORT_PREFIX: &str = "pushup_records";

pub struct ExportLogic;

impl ExportLogic {
    /// Writes `table` in `format` to `file`, or to
    /// `pushup_records_YYYYMMDD.<ext>` in the working directory when no file
    /// is given. Returns the path written.
    pub fn export(
        table: &RecordTable,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(format, date::today())),
        };

        ensure_writable(&path, force)?;

        if table.is_empty() {
            warning("No records yet, exporting an empty table.");
        }

        write(table, format, &path)?;

        info!(format = format.as_str(), path = %path.display(), rows = table.len(), "export written");
        Ok(path)
    }
}

pub fn default_file_name(format: ExportFormat, day: NaiveDate) -> String {
    format!(
        "{EXPORT_PREFIX}_{}.{}",
        date::compact(day),
        format.extension()
    )
}

fn write(table: &RecordTable, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(table, path),
        ExportFormat::Json => export_json(table, path),
        ExportFormat::Xlsx => export_xlsx(table, path),
    }
}

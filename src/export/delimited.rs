// src/export/delimited.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::RecordTable;
use crate::store::{UTF8_BOM, codec};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// The persisted CSV layout prefixed with a UTF-8 BOM, so spreadsheet tools
/// pick the right encoding.
pub fn csv_bytes(table: &RecordTable) -> AppResult<Vec<u8>> {
    let mut buf = UTF8_BOM.to_vec();
    codec::write_csv(&mut buf, table)?;
    Ok(buf)
}

pub fn json_string(table: &RecordTable) -> AppResult<String> {
    serde_json::to_string_pretty(table)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

pub(crate) fn export_csv(table: &RecordTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));
    fs::write(path, csv_bytes(table)?)?;
    notify_export_success("CSV", path, table.len());
    Ok(())
}

pub(crate) fn export_json(table: &RecordTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    fs::write(path, json_string(table)?)?;
    notify_export_success("JSON", path, table.len());
    Ok(())
}

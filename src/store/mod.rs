//! Durable storage of the record table: one CSV file, rewritten in full on
//! every save.

pub mod cache;
pub mod codec;

pub use cache::TableCache;

use crate::errors::{AppError, AppResult};
use crate::models::RecordTable;
use crate::ui::messages;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// UTF-8 byte-order mark, written by the CSV export and tolerated on load.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Opens the store at `path`, creating the containing directory if needed.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "record store opened");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the table, surfacing any parse failure as `AppError::Load`.
    ///
    /// A missing or empty file is an empty table, not an error.
    pub fn try_load(&self) -> AppResult<RecordTable> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(RecordTable::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| self.load_error(e))?;
        let table = codec::read_csv(strip_bom(&bytes)).map_err(|e| self.load_error(e))?;

        info!(path = %self.path.display(), rows = table.len(), "records loaded");
        Ok(table)
    }

    /// Reads the table; on failure the error is reported and an empty table
    /// is returned instead.
    pub fn load(&self) -> RecordTable {
        match self.try_load() {
            Ok(table) => table,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "load failed");
                messages::error(&e);
                RecordTable::new()
            }
        }
    }

    /// Replaces the file content with `table`.
    ///
    /// The table is written to a temporary sibling first and renamed over the
    /// target, so the previous content survives any failure.
    pub fn save(&self, table: &RecordTable) -> AppResult<()> {
        let tmp = self.temp_path();

        let result = write_file(&tmp, table).and_then(|_| {
            fs::rename(&tmp, &self.path)?;
            Ok(())
        });

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            error!(path = %self.path.display(), error = %e, "save failed");
            return Err(AppError::Save {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            });
        }

        info!(path = %self.path.display(), rows = table.len(), "records saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "records.csv".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn load_error(&self, e: impl std::fmt::Display) -> AppError {
        AppError::Load {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

fn write_file(path: &Path, table: &RecordTable) -> AppResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    codec::write_csv(&mut out, table)?;
    out.flush()?;

    let file = out.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}

/// Drops a leading UTF-8 byte-order mark, if any.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info as trace_info;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copies the data file to `dest_file`, or packs it into a `.zip` next to
    /// it when `compress` is set. With `compress`, `dest_file` itself is never
    /// written; it only names the archive and its entry.
    ///
    /// Returns the path of the file actually written.
    pub fn backup(
        store: &RecordStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = store.path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        if compress && has_zip_extension(dest) {
            return Err(AppError::Other(format!(
                "'{}' already ends in .zip; pass the plain file name with --compress",
                dest.display()
            )));
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if same_file(src, &target)? {
            return Err(AppError::Other(format!(
                "backup target '{}' is the data file itself",
                target.display()
            )));
        }

        // refuse to archive a file the store cannot read back
        store.try_load()?;

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&target, force)?;

        if compress {
            let entry = entry_name(dest)?;
            compress_backup(src, &target, entry)?;
        } else {
            fs::copy(src, &target)?;
            info(format!("Copied {} → {}", src.display(), target.display()));
        }

        trace_info!(src = %src.display(), dest = %target.display(), compress, "backup created");
        success(format!("Backup created: {}", target.display()));

        Ok(target)
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// True when both paths name the same file, following symlinks when the
/// target already exists.
fn same_file(a: &Path, b: &Path) -> AppResult<bool> {
    if b.exists() {
        return Ok(fs::canonicalize(a)? == fs::canonicalize(b)?);
    }
    Ok(std::path::absolute(a)? == std::path::absolute(b)?)
}

fn entry_name(dest: &Path) -> AppResult<String> {
    dest.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", dest.display())))
}

/// Writes `src` into a new archive at `zip_path` under `entry`.
fn compress_backup(src: &Path, zip_path: &Path, entry: String) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}

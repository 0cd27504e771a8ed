use super::{open_session, report_warnings, resolve_editor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Mutation, merge};
use crate::errors::{AppError, AppResult};
use crate::models::RecordTable;
use crate::store::{codec, strip_bom};
use crate::ui::messages::{info, success, warning};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Open the table as CSV in an editor and save whatever comes back.
///
/// Rows deleted in the editor are deleted from the log; totals are always
/// recomputed from the three slots.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { editor } = cmd {
        let mut session = open_session(cfg)?;
        let current = session.table().clone();

        let tmp = scratch_path();
        codec::write_csv(File::create(&tmp)?, &current)?;

        if let Err(e) = run_editor(&resolve_editor(editor), &tmp) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        // on a bad edit or a failed save the scratch file stays
        let edited = read_back(&tmp).map_err(|e| keep_scratch(&tmp, e))?;

        if merge::overwrite(&edited)? == current {
            let _ = fs::remove_file(&tmp);
            info("No changes.");
            return Ok(());
        }

        let applied = session
            .apply(&Mutation::Overwrite(edited))
            .map_err(|e| keep_scratch(&tmp, e))?;
        let _ = fs::remove_file(&tmp);
        report_warnings(&applied);

        success(format!("Table saved ({} day(s)).", applied.table.len()));
    }

    Ok(())
}

fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("pushlog-edit-{}.csv", std::process::id()))
}

fn keep_scratch(tmp: &Path, e: AppError) -> AppError {
    warning(format!("Your edits are kept in {}", tmp.display()));
    e
}

fn run_editor(editor: &str, path: &Path) -> AppResult<()> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| AppError::Editor(format!("cannot start '{editor}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("'{editor}' exited with {status}")))
    }
}

/// Reads the edited file and checks it would be accepted as an overwrite.
fn read_back(path: &Path) -> AppResult<RecordTable> {
    let bytes = fs::read(path)?;
    let rows = codec::read_rows(strip_bom(&bytes))?;
    let table = RecordTable::from_records(rows);
    merge::overwrite(&table)?;
    Ok(table)
}

use super::{open_session, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Mutation;
use crate::errors::{AppError, AppResult};
use crate::models::RecordTable;
use crate::store::{codec, strip_bom};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use std::fs;

/// Replace the whole table with a CSV file (e.g. an edited export).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { from, yes } = cmd {
        let bytes = fs::read(from)?;
        let rows = codec::read_rows(strip_bom(&bytes)).map_err(|e| AppError::Load {
            path: from.clone(),
            reason: e.to_string(),
        })?;
        let incoming = RecordTable::from_records(rows);

        let mut session = open_session(cfg)?;
        let current_rows = session.table().len();

        if !*yes
            && !confirm(&format!(
                "Replace {current_rows} recorded day(s) with {} day(s) from '{from}'?",
                incoming.len()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let applied = session.apply(&Mutation::Overwrite(incoming))?;
        report_warnings(&applied);

        success(format!(
            "Imported {} day(s) from '{from}'.",
            applied.table.len()
        ));
    }

    Ok(())
}

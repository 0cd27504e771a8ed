use super::{open_session, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, yes } = cmd {
        let d = parse_date_arg(date)?;

        let mut session = open_session(cfg)?;
        let mutation = merge::without_row(session.table(), d)?;

        if !*yes && !confirm(&format!("Delete the record for {d}? This cannot be undone.")) {
            info("Operation cancelled.");
            return Ok(());
        }

        session.apply(&mutation)?;
        success(format!("Record for {d} has been deleted."));
    }

    Ok(())
}

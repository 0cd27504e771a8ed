use super::{open_session, parse_date_arg, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge;
use crate::errors::AppResult;
use crate::models::SlotCounts;
use crate::ui::messages::success;

/// Replace the three counts of one day. Unlike `add`, nothing is summed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { date, counts } = cmd {
        let d = parse_date_arg(date)?;
        let values: SlotCounts = (*counts).into();

        let mut session = open_session(cfg)?;
        let mutation = merge::with_row(session.table(), d, values)?;
        let applied = session.apply(&mutation)?;
        report_warnings(&applied);

        let total = applied.table.get(d).map(|r| r.total).unwrap_or(0);
        success(format!(
            "{d} set to morning {} / afternoon {} / evening {} (total {total})",
            values.morning, values.afternoon, values.evening
        ));
    }

    Ok(())
}

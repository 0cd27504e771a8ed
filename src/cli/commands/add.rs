use super::{open_session, parse_date_arg, report_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Mutation, Submission};
use crate::errors::AppResult;
use crate::models::SlotCounts;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Add counts to a day on top of what is already there.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, counts } = cmd {
        //
        // 1. Resolve date (default = today)
        //
        let d = match date {
            Some(s) => parse_date_arg(s)?,
            None => date::today(),
        };
        let deltas: SlotCounts = (*counts).into();

        //
        // 2. Show what is already recorded for that day
        //
        let mut session = open_session(cfg)?;

        if let Some(existing) = session.table().get(d) {
            info(format!(
                "Existing record for {d}: morning {} / afternoon {} / evening {} (total {})",
                existing.morning, existing.afternoon, existing.evening, existing.total
            ));
        }

        //
        // 3. Merge and save
        //
        let mutation = Mutation::Submit(Submission::new(d, deltas));
        let applied = session.apply(&mutation)?;
        report_warnings(&applied);

        let total = applied.table.get(d).map(|r| r.total).unwrap_or(0);
        success(format!(
            "{d}: +{} morning / +{} afternoon / +{} evening → total {total}",
            deltas.morning, deltas.afternoon, deltas.evening
        ));
    }

    Ok(())
}

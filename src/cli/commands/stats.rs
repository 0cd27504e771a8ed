use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Statistics;
use crate::errors::{AppError, AppResult};
use crate::models::Slot;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let mut session = open_session(cfg)?;
        let stats = Statistics::compute(session.table());

        if *json {
            let out = serde_json::to_string_pretty(&stats)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        print_summary(&stats, cfg);
    }

    Ok(())
}

fn print_summary(stats: &Statistics, cfg: &Config) {
    let sep = &cfg.separator_char;

    header("Summary", sep);
    println!("Total:        {}", stats.total);
    println!("Record days:  {}", stats.record_days);
    println!("Daily avg:    {:.1}", stats.daily_average);

    if stats.record_days == 0 {
        return;
    }

    println!();
    header("Records", sep);
    if let Some(best) = stats.best {
        println!("Best day:     {} ({})", best.total, best.date);
    }
    if let Some(worst) = stats.worst {
        println!("Worst day:    {} ({})", worst.total, worst.date);
    }
    for slot in Slot::ALL {
        println!(
            "{:<13} {}",
            format!("Max {}:", slot.label()),
            stats.slot_max.get(slot)
        );
    }

    println!();
    header("Weekly totals", sep);
    let mut weekly = Table::new(vec![Column::right("Week"), Column::right("Total")], sep);
    for w in &stats.weekly {
        weekly.add_row(vec![w.week.to_string(), w.total.to_string()]);
    }
    print!("{}", weekly.render());
}

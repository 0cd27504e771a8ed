use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RecordTable;
use crate::ui::messages::{header, info};
use crate::utils::date::weekday_short;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { chart } = cmd {
        let mut session = open_session(cfg)?;
        let table = session.table();

        if table.is_empty() {
            info("No records yet. Add one with `pushlog add -m <n> -a <n> -e <n>`.");
            return Ok(());
        }

        header("Daily records", &cfg.separator_char);
        print!("{}", render_records(table, cfg));

        if *chart {
            println!();
            header("Daily totals", &cfg.separator_char);
            print!("{}", render_chart(table, cfg.chart_width));
        }
    }

    Ok(())
}

pub fn render_records(table: &RecordTable, cfg: &Config) -> String {
    let mut columns = vec![Column::left("Date")];
    if cfg.show_weekday {
        columns.push(Column::left("Day"));
    }
    columns.extend([
        Column::right("Morning"),
        Column::right("Afternoon"),
        Column::right("Evening"),
        Column::right("Total"),
    ]);

    let mut out = Table::new(columns, &cfg.separator_char);

    for r in table {
        let mut row = vec![r.date.to_string()];
        if cfg.show_weekday {
            row.push(weekday_short(r.date));
        }
        row.extend([
            r.morning.to_string(),
            r.afternoon.to_string(),
            r.evening.to_string(),
            r.total.to_string(),
        ]);
        out.add_row(row);
    }

    out.render()
}

/// One horizontal bar per day, the longest being `width` characters.
pub fn render_chart(table: &RecordTable, width: usize) -> String {
    let max = table.iter().map(|r| r.total).max().unwrap_or(0);
    let mut out = String::new();

    for r in table {
        let len = if max == 0 {
            0
        } else {
            (r.total as usize * width).div_ceil(max as usize)
        };
        out.push_str(&format!("{}  {:<width$}  {}\n", r.date, "█".repeat(len), r.total));
    }

    out
}

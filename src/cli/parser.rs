use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for pushlog
#[derive(Parser)]
#[command(
    name = "pushlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log December push-ups in three daily slots: morning, afternoon, evening",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file writes, logs to stderr)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Slot counts shared by `add` (as deltas) and `set` (as full values).
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CountArgs {
    #[arg(short = 'm', long = "morning", default_value_t = 0, help = "Morning count")]
    pub morning: u32,

    #[arg(short = 'a', long = "afternoon", default_value_t = 0, help = "Afternoon count")]
    pub afternoon: u32,

    #[arg(short = 'e', long = "evening", default_value_t = 0, help = "Evening count")]
    pub evening: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file, the data directory and an empty data file
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or a path)")]
        editor: Option<String>,
    },

    /// Add counts to a day (added on top of what is already recorded)
    Add {
        /// Date (YYYY-MM-DD), defaults to today; must be in December of this year
        date: Option<String>,

        #[command(flatten)]
        counts: CountArgs,
    },

    /// Replace the counts of a day with the given values
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        counts: CountArgs,
    },

    /// Delete the record of a day
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Edit the whole table in a text editor, then save it as edited
    Edit {
        #[arg(long = "editor", help = "Editor to use (vim, nano, or a path)")]
        editor: Option<String>,
    },

    /// Replace the whole table with the content of a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        from: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List recorded days
    List {
        #[arg(long = "chart", help = "Draw a bar chart of daily totals")]
        chart: bool,
    },

    /// Show totals, averages, best/worst day and weekly totals
    Stats {
        #[arg(long = "json", help = "Print statistics as JSON")]
        json: bool,
    },

    /// Export the table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long = "out",
            value_name = "FILE",
            help = "Output file (default: pushup_records_YYYYMMDD.<ext>)"
        )]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl From<CountArgs> for crate::models::SlotCounts {
    fn from(c: CountArgs) -> Self {
        Self::new(c.morning, c.afternoon, c.evening)
    }
}

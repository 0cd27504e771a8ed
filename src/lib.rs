//! pushlog library root.
//! Exposes the CLI parser, the high-level run() function and the record
//! store, merger and statistics used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is read once; --file wins over the configured data file
    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.file {
        let path = utils::path::expand_tilde(custom);
        cfg.data_file = std::path::absolute(&path)?.to_string_lossy().to_string();
    }

    let log_dir = (!cli.test).then(Config::log_dir);
    let level = if cli.test { "warn" } else { cfg.log_level.as_str() };
    utils::logging::enable_logging(log_dir.as_deref(), level)?;

    tracing::debug!(data = %cfg.data_path().display(), "configuration loaded");
    dispatch(&cli, &cfg)
}

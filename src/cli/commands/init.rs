use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RecordTable;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use tracing::info as trace_info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - an empty data file with the header row, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let custom = cli.file.as_ref().map(|_| cfg.data_file.clone());
    let cfg = Config::init_all(custom, cli.test)?;
    let data_path = cfg.data_path();

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data file   : {}", data_path.display()));

    let store = RecordStore::open(&data_path)?;

    if store.exists() {
        // fail loudly on a corrupt file rather than overwrite it
        let table = store.try_load()?;
        info(format!("Existing data kept ({} day(s)).", table.len()));
    } else {
        store.save(&RecordTable::new())?;
    }

    trace_info!(data = %data_path.display(), test = cli.test, "initialized");
    success("pushlog initialization completed!");
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        out,
        compress,
        force,
    } = cmd
    {
        let store = RecordStore::open(cfg.data_path())?;
        BackupLogic::backup(&store, out, *compress, *force)?;
    }

    Ok(())
}

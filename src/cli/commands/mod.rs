pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod set;
pub mod stats;

use crate::config::Config;
use crate::core::{Applied, Session, SubmitWindow};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Opens the configured data file and wraps it in a session.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session> {
    let store = RecordStore::open(cfg.data_path())?;
    Ok(Session::new(store, SubmitWindow::current()?))
}

pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Prints the non-blocking warnings collected while applying a mutation.
pub(crate) fn report_warnings(applied: &Applied) {
    for w in &applied.warnings {
        warning(w);
    }
}

/// Editor from `--editor`, then `$EDITOR`/`$VISUAL`, then a platform default.
pub(crate) fn resolve_editor(requested: &Option<String>) -> String {
    requested
        .clone()
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

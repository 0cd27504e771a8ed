use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// With `log_dir` events go to a daily-rolling file there; without it they go
/// to stderr. `RUST_LOG` wins over `level` when set.
pub fn enable_logging(log_dir: Option<&Path>, level: &str) -> AppResult<()> {
    let directive = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_")));
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::Config(format!("invalid log level '{directive}': {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::Builder::new()
                .rotation(Rotation::DAILY)
                .max_log_files(7)
                .filename_prefix("pushlog")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::Config(format!("cannot open log dir: {e}")))?;
            builder.with_ansi(false).with_writer(appender).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // a subscriber installed earlier in the process keeps running
    if let Err(e) = result {
        tracing::debug!(error = %e, "logging already initialised");
    }

    Ok(())
}

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Routes log records to `path`, appending to an existing file.
///
/// The terminal is in raw mode while the game runs, so records are never
/// written to stderr. Without a log file no logger is installed and the `log`
/// macros compile down to no-ops.
pub fn init_file_logger(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}

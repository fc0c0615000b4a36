use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal host.
///
/// The simulation itself never fails; collisions end the game instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize game state: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

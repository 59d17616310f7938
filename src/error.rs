use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the configuration and I/O boundary.
///
/// Gameplay itself never fails; collisions are modeled as a terminal
/// [`GameStatus`](crate::game::GameStatus), not as errors.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{obstacles} obstacles and a {snake_len}-cell snake do not fit on a {width}x{height} grid")]
    BoardTooSmall {
        width: u16,
        height: u16,
        obstacles: usize,
        snake_len: usize,
    },

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("unknown difficulty level: {0:?}")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, SnakeError>;

//! Error types for the engine and its text shell

use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Errors raised while driving a game from the text shell.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("position {position} is outside the board (1-{max})")]
    OutOfRange { position: i128, max: usize },

    #[error("position {position} is already occupied")]
    Occupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid input '{0}'")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

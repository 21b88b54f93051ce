use std::path::PathBuf;

/// Why an insertion was rejected. The engine state is untouched in every case
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("the game is already over")]
    GameOver,

    #[error("column {column} out of range, board has {board_size} columns")]
    ColumnOutOfRange { column: usize, board_size: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors raised while parsing a line of user input into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("{command} expects a column number")]
    MissingColumn { command: &'static str },

    #[error("invalid column '{0}'")]
    InvalidColumn(String),

    #[error("{command} takes no arguments")]
    UnexpectedArgument { command: &'static str },
}

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

    #[error("config validation error: {0}")]
    Validation(String),
}

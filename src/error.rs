use std::path::PathBuf;

/// Errors reported when a move or grid query is rejected.
///
/// All of these are recoverable: the match is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already finished")]
    GameAlreadyFinished,

    #[error("position ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
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

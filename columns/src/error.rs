use std::path::PathBuf;

use thiserror::Error;

/// Result alias for column metadata operations.
pub type Result<T> = std::result::Result<T, ColumnsError>;

#[derive(Debug, Error)]
pub enum ColumnsError {
    #[error("Failed to read column list {path}: {source}")]
    ListRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write column CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode CSV record: {0}")]
    CsvEncode(#[from] csv::Error),

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Unknown column list kind: {0} (expected `profile` or `history`)")]
    UnknownListKind(String),
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HtmlModeError>;

#[derive(Debug, Error)]
pub enum HtmlModeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse script layout: {0}")]
    LayoutParse(#[from] toml::de::Error),

    #[error("Invalid script layout: {0}")]
    InvalidLayout(String),

    #[error("Failed to build script pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}

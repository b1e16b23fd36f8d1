//! Where column lists live inside a MESA installation.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ColumnsError, Result};

/// Environment variable pointing at the MESA source tree.
pub const MESA_DIR_ENV: &str = "MESA_DIR";

/// Which of MESA's output column lists to read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColumnListKind {
    #[default]
    Profile,
    History,
}

impl ColumnListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::History => "history",
        }
    }

    /// File name of the list under `star/defaults/`.
    pub fn list_file_name(self) -> String {
        format!("{}_columns.list", self.as_str())
    }

    /// Default name of the generated metadata CSV.
    pub fn csv_file_name(self) -> String {
        format!("{}_columns.csv", self.as_str())
    }
}

impl std::fmt::Display for ColumnListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnListKind {
    type Err = ColumnsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profile" => Ok(Self::Profile),
            "history" => Ok(Self::History),
            other => Err(ColumnsError::UnknownListKind(other.to_string())),
        }
    }
}

/// `<mesa_dir>/star/defaults/<kind>_columns.list`
pub fn list_path(mesa_dir: &Path, kind: ColumnListKind) -> PathBuf {
    mesa_dir
        .join("star")
        .join("defaults")
        .join(kind.list_file_name())
}

/// Read `MESA_DIR` from the process environment. Unset and empty are both
/// treated as missing.
pub fn mesa_dir_from_env() -> Result<PathBuf> {
    match std::env::var_os(MESA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(ColumnsError::MissingEnv(MESA_DIR_ENV)),
    }
}

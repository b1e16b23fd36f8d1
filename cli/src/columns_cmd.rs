//! `gen-columns`: MESA column list to explorer metadata CSV.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mesa_explorer_columns::{ColumnListKind, generate, list_path, mesa_dir_from_env};

#[derive(Debug, Parser)]
pub struct GenColumnsArgs {
    /// MESA source tree (default: $MESA_DIR)
    #[arg(long, value_name = "DIR")]
    pub mesa_dir: Option<PathBuf>,

    /// Which column list to read: profile or history
    #[arg(long, value_name = "KIND", default_value = "profile")]
    pub list: ColumnListKind,

    /// Read this list instead of <DIR>/star/defaults/<KIND>_columns.list
    #[arg(long, value_name = "FILE", conflicts_with = "mesa_dir")]
    pub input: Option<PathBuf>,

    /// Output CSV (default: ./<KIND>_columns.csv)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenColumnsArgs {
    fn input_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(input) = &self.input {
            return Ok(input.clone());
        }
        let mesa_dir = match &self.mesa_dir {
            Some(dir) => dir.clone(),
            None => mesa_dir_from_env()?,
        };
        Ok(list_path(&mesa_dir, self.list))
    }
}

pub fn run_gen_columns(args: GenColumnsArgs) -> anyhow::Result<()> {
    let input = args.input_path()?;
    let GenColumnsArgs { list, output, .. } = args;
    let output = output.unwrap_or_else(|| PathBuf::from(list.csv_file_name()));

    tracing::debug!("reading {list} list from {}", input.display());
    let summary = generate(&input, &output)
        .with_context(|| format!("generating {list} column metadata"))?;
    tracing::debug!("{} rows, {} log-scaled", summary.rows, summary.log_rows);
    Ok(())
}

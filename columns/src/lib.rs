//! Column metadata generation for the MESA data explorer.
//!
//! Reads a MESA column list (`star/defaults/profile_columns.list` or
//! `history_columns.list`), decides a plotting scale for every column and
//! writes the `key,scale,html_name,html_units` CSV the explorer loads.

pub mod csv_out;
pub mod error;
pub mod list;
pub mod scale;
pub mod source;

pub use csv_out::{ColumnRow, GenerateSummary, generate, render_csv, write_rows};
pub use error::{ColumnsError, Result};
pub use list::{parse_column_list, read_column_list};
pub use scale::{Scale, classify};
pub use source::{ColumnListKind, MESA_DIR_ENV, list_path, mesa_dir_from_env};

//! Column metadata CSV output.
//!
//! The explorer reads `key,scale,html_name,html_units`. Only `key` and
//! `scale` are generated; the display name and units columns are left empty
//! for hand curation.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::{ColumnsError, Result};
use crate::list::read_column_list;
use crate::scale::{Scale, classify};

pub const CSV_HEADERS: [&str; 4] = ["key", "scale", "html_name", "html_units"];

/// One output record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnRow {
    pub key: String,
    pub scale: Scale,
    pub html_name: String,
    pub html_units: String,
}

impl ColumnRow {
    pub fn from_identifier(identifier: &str) -> Self {
        Self {
            key: identifier.to_string(),
            scale: classify(identifier),
            html_name: String::new(),
            html_units: String::new(),
        }
    }
}

/// What a [`generate`] run produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub rows: usize,
    pub log_rows: usize,
}

/// Write the header followed by one record per row.
///
/// The header is always written, so an empty list still yields a valid CSV.
pub fn write_rows<W: Write>(writer: W, rows: &[ColumnRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Classify `identifiers` and render the complete CSV document.
pub fn render_csv(identifiers: &[String]) -> Result<Vec<u8>> {
    let rows: Vec<ColumnRow> = identifiers
        .iter()
        .map(|id| ColumnRow::from_identifier(id))
        .collect();
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows)?;
    Ok(buf)
}

/// Read the column list at `input` and write its metadata CSV to `output`.
///
/// The CSV is rendered in memory first and then moved into place, so a
/// failed run leaves any previous `output` untouched.
pub fn generate(input: &Path, output: &Path) -> Result<GenerateSummary> {
    let identifiers = read_column_list(input)?;
    let log_rows = identifiers
        .iter()
        .filter(|id| classify(id) == Scale::Log)
        .count();
    let bytes = render_csv(&identifiers)?;
    atomic_write(output, &bytes)?;

    tracing::info!(
        "wrote {} columns ({log_rows} log) to {}",
        identifiers.len(),
        output.display()
    );
    Ok(GenerateSummary {
        output: output.to_path_buf(),
        rows: identifiers.len(),
        log_rows,
    })
}

/// Write `data` to a temporary file next to `path`, then move it into place.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let to_err = |source| ColumnsError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_err)?;
    tmp.write_all(data).map_err(to_err)?;
    tmp.persist(path).map_err(|err| to_err(err.error))?;
    Ok(())
}

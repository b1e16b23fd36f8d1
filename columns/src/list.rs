//! Parser for MESA `*_columns.list` files.
//!
//! A list holds one column name per line. `!` starts a comment when it is
//! followed by whitespace (`! log10 radius`), by `#` section markers
//! (`!# Structure`) or by the end of the line. `!-----` lines are decorative
//! rules. A name written directly after `!` (`!logR_cm`) is switched off in
//! MESA's own output but is still a column the explorer can meet, so the
//! marker is stripped and the name kept.

use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{ColumnsError, Result};

#[allow(clippy::expect_used)]
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*!+#*(?:\s.*)?$").expect("valid comment regex"));

#[allow(clippy::expect_used)]
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*!-.*").expect("valid horizontal rule regex"));

/// Extract the column identifiers from the contents of a column list, in
/// file order.
pub fn parse_column_list(contents: &str) -> Vec<String> {
    contents.lines().filter_map(column_from_line).collect()
}

/// Read a column list from disk and parse it.
pub fn read_column_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ColumnsError::ListRead {
        path: path.to_path_buf(),
        source,
    })?;
    let columns = parse_column_list(&contents);
    tracing::debug!(
        "parsed {} columns from {}",
        columns.len(),
        path.display()
    );
    if columns.is_empty() {
        tracing::warn!("column list {} contains no columns", path.display());
    }
    Ok(columns)
}

fn column_from_line(line: &str) -> Option<String> {
    let without_comment = COMMENT_RE.replace(line, "");
    let without_rule = RULE_RE.replace(&without_comment, "");
    let name = without_rule.trim().trim_start_matches('!');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

//! CSV row reader.
//!
//! Tokenization is delegated to the `csv` crate; this module only gates the
//! input file and shapes the records into raw rows of string cells. What a
//! valid sheet looks like is the validator's business, so rows come out
//! ragged and unjudged.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{LabelError, Result};

/// Read a CSV file into raw rows.
///
/// The path must carry a `.csv` suffix; anything else is rejected before
/// the file is opened.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    if !is_csv_path(path) {
        return Err(LabelError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    if !path.exists() {
        return Err(LabelError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    parse_rows(&content)
}

/// Check the `.csv` suffix (case-insensitive).
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
}

/// Tokenize CSV content into raw rows of string cells.
///
/// Rows may be ragged. Blank rows are skipped greedily: lines that are
/// empty or contain only whitespace cells never reach the validator.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    // Greedy blank-row skip: the csv reader already drops fully empty lines,
    // but a line of separators or spaces still produces all-blank cells.
    rows.retain(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    debug!("Parsed {} row(s)", rows.len());

    Ok(rows)
}

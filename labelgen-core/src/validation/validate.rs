//! Sheet-shape rules: header conformance and minimum row count.

/// Message for a malformed header row.
pub const INVALID_HEADER_MESSAGE: &str =
    "Invalid header row. Expected headers: \"Name\" and \"Barcode\".";

/// Message for a sheet without data rows.
pub const NO_DATA_ROWS_MESSAGE: &str =
    "The CSV must contain at least one row of data (excluding the header row).";

/// Validate raw CSV rows against the expected label-sheet shape.
///
/// Returns human-readable messages; an empty list means the input is valid.
/// The rules are checked independently, never short-circuited, so one call
/// surfaces every applicable message.
///
/// Barcode values are deliberately not inspected here: whether a value is
/// legal is the encoder's call, made later in the pipeline.
pub fn validate_rows(rows: &[Vec<String>]) -> Vec<String> {
    let mut errors = Vec::new();

    // The first row must read Name, Barcode in its first two cells.
    // Comparison is exact: no trimming, no case folding. Trailing cells
    // are ignored.
    let header_ok = rows.first().is_some_and(|header| {
        header.first().map(String::as_str) == Some("Name")
            && header.get(1).map(String::as_str) == Some("Barcode")
    });
    if !header_ok {
        errors.push(INVALID_HEADER_MESSAGE.to_string());
    }

    // At least one data row beyond the header.
    if rows.len() <= 1 {
        errors.push(NO_DATA_ROWS_MESSAGE.to_string());
    }

    errors
}

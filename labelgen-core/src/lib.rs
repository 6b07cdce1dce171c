//! labelgen-core - Core library for barcode label sheet generation.
//!
//! This library converts a two-column CSV (product name, barcode value) into
//! a multi-page PDF with one 60mm x 40mm label per data row: a barcode symbol
//! stretched into a fixed box, the product name centered above it and the raw
//! value centered below it.
//!
//! # Example
//!
//! ```no_run
//! use labelgen_core::{convert_csv_to_pdf, Symbology};
//! use std::path::Path;
//!
//! let pdf = convert_csv_to_pdf(Path::new("products.csv"), Symbology::Ean13).unwrap();
//! std::fs::write("output.pdf", pdf).unwrap();
//! ```

pub mod barcode;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::LabelGeometry;
pub use error::{LabelError, Result};
pub use generator::assemble_pdf;
pub use model::{LabelRecord, Symbology};
pub use parser::read_rows;
pub use validation::validate_rows;

/// Default name of the output artifact.
pub const OUTPUT_FILENAME: &str = "output.pdf";

/// Convert a CSV file to a label PDF.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Gate on the `.csv` suffix
/// 2. Tokenize the file into raw rows
/// 3. Validate the sheet shape (all messages collected; any is terminal)
/// 4. Render, lay out and paginate one label per data row
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV file
/// * `symbology` - Barcode symbology for every row of this run
///
/// # Returns
///
/// The bytes of the generated PDF; the caller decides where to write them.
pub fn convert_csv_to_pdf(input_path: &std::path::Path, symbology: Symbology) -> Result<Vec<u8>> {
    let rows = parser::read_rows(input_path)?;
    generator::assemble_pdf(&rows, symbology)
}

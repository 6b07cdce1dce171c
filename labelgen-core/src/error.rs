//! Error types for CSV to label-PDF conversion.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Symbology;

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The selected input is not a CSV file.
    #[error("The uploaded file must be a CSV.")]
    NotCsv { path: PathBuf },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// One or more sheet-shape rules failed. Every applicable message is
    /// collected before the run is rejected; nothing is generated.
    #[error("{}", .messages.join("\n"))]
    Validation { messages: Vec<String> },

    /// A barcode value cannot be encoded in the selected symbology.
    ///
    /// Detected mid-pipeline and fatal for the whole run: already-built
    /// pages are discarded and no document is produced.
    #[error("Cannot encode {value:?} as {symbology}: {reason}")]
    Encoding {
        value: String,
        symbology: Symbology,
        reason: String,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF generation error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabelError {
    /// Build a validation error from collected messages.
    pub fn validation(messages: Vec<String>) -> Self {
        LabelError::Validation { messages }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, LabelError>;

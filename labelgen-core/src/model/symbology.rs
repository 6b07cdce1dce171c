//! Barcode symbology selection.

use serde::{Deserialize, Serialize};

/// Barcode encoding standard.
///
/// Bound once per run, never per row: every label of one document is
/// encoded with the same symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Symbology {
    /// EAN-13: 12 or 13 numeric digits.
    #[default]
    Ean13,
    /// Code 128 (code set B): printable ASCII.
    Code128,
}

impl Symbology {
    /// Parse a channel name, e.g. "ean13" or "code128".
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ean13" | "ean-13" => Some(Symbology::Ean13),
            "code128" | "code-128" => Some(Symbology::Code128),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "EAN13"),
            Symbology::Code128 => write!(f, "CODE128"),
        }
    }
}

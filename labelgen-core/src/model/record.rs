//! Label record derived from a validated CSV data row.

use serde::{Deserialize, Serialize};

/// A (product name, barcode value) pair for exactly one label.
///
/// Constructed once per data row after validation passes and consumed once
/// by the layout engine; one record becomes one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Product name printed above the barcode.
    pub product_name: String,
    /// Raw barcode value; legality depends on the selected symbology.
    pub barcode_value: String,
}

impl LabelRecord {
    /// Create a new record.
    pub fn new(product_name: impl Into<String>, barcode_value: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            barcode_value: barcode_value.into(),
        }
    }

    /// Build a record from the first two cells of a raw CSV row.
    ///
    /// Missing cells become empty strings (and fail later at the encoding
    /// stage); extra cells are ignored.
    pub fn from_row(row: &[String]) -> Self {
        Self {
            product_name: row.first().cloned().unwrap_or_default(),
            barcode_value: row.get(1).cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_row_takes_first_two_cells() {
        let row = vec![
            "Widget A".to_string(),
            "4006381333931".to_string(),
            "ignored".to_string(),
        ];
        let record = LabelRecord::from_row(&row);
        assert_eq!(record, LabelRecord::new("Widget A", "4006381333931"));
    }

    #[test]
    fn test_from_row_short_row_yields_empty_cells() {
        let record = LabelRecord::from_row(&["Widget A".to_string()]);
        assert_eq!(record.product_name, "Widget A");
        assert_eq!(record.barcode_value, "");
    }
}

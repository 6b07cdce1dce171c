//! The row-to-label pipeline: validate, render, lay out, draw, paginate.

use tracing::{debug, info};

use crate::barcode;
use crate::config::LabelGeometry;
use crate::error::{LabelError, Result};
use crate::layout::{self, PageState};
use crate::model::{LabelRecord, Symbology};
use crate::validation::validate_rows;

use super::document::LabelDocument;

/// Assemble a label PDF from raw CSV rows.
///
/// The header row is checked and stripped here; each remaining row becomes
/// exactly one page, in input order. An encoding failure on any row aborts
/// the whole run; no partial document is ever returned.
pub fn assemble_pdf(rows: &[Vec<String>], symbology: Symbology) -> Result<Vec<u8>> {
    let messages = validate_rows(rows);
    if !messages.is_empty() {
        return Err(LabelError::validation(messages));
    }

    let geometry = LabelGeometry::for_symbology(symbology);
    let records: Vec<LabelRecord> = rows[1..].iter().map(|row| LabelRecord::from_row(row)).collect();

    info!("Laying out {} label(s) as {}", records.len(), symbology);

    let mut doc = LabelDocument::new(geometry);
    let mut state = PageState::default();
    let last = records.len() - 1;

    for (index, record) in records.iter().enumerate() {
        if state.next_requires_break() {
            doc.add_page();
        }

        // One raster per row, rendered and placed before the next row starts.
        let raster = barcode::render(
            &record.barcode_value,
            symbology,
            geometry.barcode_height as u32,
        )?;

        let placement = layout::layout_label(record, &geometry, |text| {
            doc.text_width(text, geometry.font_size)
        });

        doc.draw_image(
            raster,
            placement.barcode_x,
            placement.barcode_y,
            placement.barcode_width,
            placement.barcode_height,
        );
        doc.draw_text(
            &record.product_name,
            placement.name_x,
            placement.name_y,
            placement.font_size,
        );
        doc.draw_text(
            &record.barcode_value,
            placement.value_x,
            placement.value_y,
            placement.font_size,
        );

        if layout::overflow_page_needed(&geometry, index == last) {
            doc.add_page();
        }

        debug!("Committed page for row {}", index + 1);
    }

    info!("Assembled {} page(s)", doc.page_count());

    doc.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{INVALID_HEADER_MESSAGE, NO_DATA_ROWS_MESSAGE};

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_validation_failure_is_terminal() {
        let result = assemble_pdf(&rows(&[&["Foo", "Bar"], &["A", "4006381333931"]]), Symbology::Ean13);
        match result {
            Err(LabelError::Validation { messages }) => {
                assert_eq!(messages, vec![INVALID_HEADER_MESSAGE.to_string()]);
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_is_terminal() {
        let result = assemble_pdf(&rows(&[&["Name", "Barcode"]]), Symbology::Ean13);
        match result {
            Err(LabelError::Validation { messages }) => {
                assert_eq!(messages, vec![NO_DATA_ROWS_MESSAGE.to_string()]);
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_value_aborts_whole_run() {
        // First row is fine; the bad second row still kills the run.
        let input = rows(&[
            &["Name", "Barcode"],
            &["Widget A", "4006381333931"],
            &["Widget B", "abc"],
        ]);
        let result = assemble_pdf(&input, Symbology::Ean13);
        assert!(matches!(result, Err(LabelError::Encoding { .. })));
    }

    #[test]
    fn test_valid_rows_produce_pdf_bytes() {
        let input = rows(&[&["Name", "Barcode"], &["Widget A", "4006381333931"]]);
        let bytes = assemble_pdf(&input, Symbology::Ean13).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}

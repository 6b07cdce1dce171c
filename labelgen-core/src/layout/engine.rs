//! Label geometry: where the barcode box and text lines land on a page.
//!
//! The engine computes "where" and nothing else; drawing is the assembly
//! pipeline's job. Coordinates are mm from the page's top-left corner.

use crate::config::{LabelGeometry, NAME_BASELINE_OFFSET_MM};
use crate::model::LabelRecord;

/// Computed placement for one label, in mm from the page's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Barcode box origin, x.
    pub barcode_x: f64,
    /// Barcode box origin, y.
    pub barcode_y: f64,
    /// Barcode box width; the raster is stretched to fill it.
    pub barcode_width: f64,
    /// Barcode box height.
    pub barcode_height: f64,
    /// Product-name baseline origin.
    pub name_x: f64,
    pub name_y: f64,
    /// Barcode-value baseline origin.
    pub value_x: f64,
    pub value_y: f64,
    /// Text size for both lines, pt.
    pub font_size: f64,
}

/// Compute the placement for one record.
///
/// `measure` is the document's text-width capability: mm at the configured
/// font size. The centering offsets are the only per-label values; the
/// barcode box itself sits at the same spot on every page.
pub fn layout_label<F>(record: &LabelRecord, geometry: &LabelGeometry, measure: F) -> LabelPlacement
where
    F: Fn(&str) -> f64,
{
    let x = geometry.x_margin;
    let y = geometry.y_margin;

    let name_width = measure(&record.product_name);
    let value_width = measure(&record.barcode_value);

    LabelPlacement {
        barcode_x: x,
        barcode_y: y,
        barcode_width: geometry.barcode_width,
        barcode_height: geometry.barcode_height,
        // The name baseline sits 2mm below the top of the barcode box,
        // overlapping it.
        name_x: centered_x(x, geometry.barcode_width, name_width),
        name_y: y + NAME_BASELINE_OFFSET_MM,
        value_x: centered_x(x, geometry.barcode_width, value_width),
        value_y: y + geometry.barcode_height,
        font_size: geometry.font_size,
    }
}

/// Horizontal centering inside the barcode box.
///
/// Unclamped: text wider than the box centers to a negative offset and
/// overflows both sides rather than being shrunk or cut.
pub fn centered_x(box_x: f64, box_width: f64, text_width: f64) -> f64 {
    box_x + (box_width - text_width) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> LabelRecord {
        LabelRecord::new("Widget A", "4006381333931")
    }

    // ==================== centering ====================

    #[test]
    fn test_centered_x_formula() {
        // x_margin + (B - w) / 2 for B = 50.
        assert_eq!(centered_x(5.0, 50.0, 10.0), 25.0);
        assert_eq!(centered_x(5.0, 50.0, 50.0), 5.0);
        assert_eq!(centered_x(5.0, 50.0, 0.0), 30.0);
    }

    #[test]
    fn test_centered_x_overflowing_text_goes_negative() {
        // Wider than the box: centered, not clamped.
        assert_eq!(centered_x(5.0, 50.0, 70.0), -5.0);
    }

    // ==================== placement ====================

    #[test]
    fn test_barcode_box_is_fixed() {
        let geometry = LabelGeometry::default();
        let placement = layout_label(&record(), &geometry, |_| 10.0);
        assert_eq!(placement.barcode_x, 5.0);
        assert_eq!(placement.barcode_y, 10.0);
        assert_eq!(placement.barcode_width, 50.0);
        assert_eq!(placement.barcode_height, 20.0);
    }

    #[test]
    fn test_text_baselines() {
        let geometry = LabelGeometry::default();
        let placement = layout_label(&record(), &geometry, |_| 10.0);
        // Name 2mm below the top of the box, value right below the box.
        assert_eq!(placement.name_y, 12.0);
        assert_eq!(placement.value_y, 30.0);
    }

    #[test]
    fn test_each_line_centers_with_its_own_width() {
        let geometry = LabelGeometry::default();
        let placement = layout_label(&record(), &geometry, |text| {
            if text == "Widget A" {
                20.0
            } else {
                30.0
            }
        });
        assert_eq!(placement.name_x, 5.0 + (50.0 - 20.0) / 2.0);
        assert_eq!(placement.value_x, 5.0 + (50.0 - 30.0) / 2.0);
    }

    #[test]
    fn test_font_size_comes_from_geometry() {
        let mut geometry = LabelGeometry::default();
        geometry.font_size = 11.0;
        let placement = layout_label(&record(), &geometry, |_| 10.0);
        assert_eq!(placement.font_size, 11.0);
    }
}

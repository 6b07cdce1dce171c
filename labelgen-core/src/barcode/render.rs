//! Barcode rasterization: value + symbology + pixel height -> Luma8 image.
//!
//! Module patterns come from the `barcoders` encoders; painting them into a
//! grayscale buffer happens here. Every call builds a fresh buffer, so no
//! drawing state survives from one row to the next.

use barcoders::sym::code128::Code128;
use barcoders::sym::ean13::EAN13;
use image::{GrayImage, Luma};

use crate::error::{LabelError, Result};
use crate::model::Symbology;

/// Width of one barcode module in pixels.
pub const MODULE_WIDTH_PX: u32 = 2;

/// Code set B selector understood by the Code 128 encoder.
const CODE128_SET_B: char = '\u{0181}'; // Ɓ

/// Render a barcode value into a grayscale raster image.
///
/// The image is exactly `height_px` tall; its width follows from the encoded
/// module count of the value under the given symbology. Bars are flat and no
/// human-readable line is drawn: the layout engine places its own text.
pub fn render(value: &str, symbology: Symbology, height_px: u32) -> Result<GrayImage> {
    let modules = encode(value, symbology)?;
    Ok(rasterize(&modules, height_px))
}

/// Encode a value into its module pattern (1 = bar, 0 = space).
fn encode(value: &str, symbology: Symbology) -> Result<Vec<u8>> {
    match symbology {
        Symbology::Ean13 => encode_ean13(value),
        Symbology::Code128 => encode_code128(value),
    }
}

fn encode_ean13(value: &str) -> Result<Vec<u8>> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(encoding_error(value, Symbology::Ean13, "value must be numeric"));
    }

    // A 13th digit is the caller-supplied check digit; verify it and hand
    // the encoder the 12-digit payload (it re-derives the check digit).
    let payload = match value.len() {
        12 => &value[..],
        13 => {
            let given = (value.as_bytes()[12] - b'0') as u32;
            if ean13_check_digit(&value[..12]) != given {
                return Err(encoding_error(value, Symbology::Ean13, "check digit mismatch"));
            }
            &value[..12]
        }
        _ => {
            return Err(encoding_error(
                value,
                Symbology::Ean13,
                "value must have 12 or 13 digits",
            ))
        }
    };

    let symbol = EAN13::new(payload)
        .map_err(|e| encoding_error(value, Symbology::Ean13, &e.to_string()))?;
    Ok(symbol.encode())
}

fn encode_code128(value: &str) -> Result<Vec<u8>> {
    if value.is_empty() {
        return Err(encoding_error(value, Symbology::Code128, "value must not be empty"));
    }
    if !value.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        return Err(encoding_error(
            value,
            Symbology::Code128,
            "value must be printable ASCII",
        ));
    }

    let data = format!("{CODE128_SET_B}{value}");
    let symbol = Code128::new(&data)
        .map_err(|e| encoding_error(value, Symbology::Code128, &e.to_string()))?;
    Ok(symbol.encode())
}

/// Compute the EAN-13 check digit for a 12-digit payload.
pub fn ean13_check_digit(payload: &str) -> u32 {
    let mut sum = 0;
    for (i, digit) in payload.chars().filter_map(|c| c.to_digit(10)).enumerate() {
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    (10 - sum % 10) % 10
}

/// Paint a module pattern into a white buffer, [`MODULE_WIDTH_PX`] columns
/// per module, full image height per bar.
fn rasterize(modules: &[u8], height_px: u32) -> GrayImage {
    let width = (modules.len() as u32).max(1) * MODULE_WIDTH_PX;
    let height = height_px.max(1);
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));

    for (i, module) in modules.iter().enumerate() {
        if *module == 0 {
            continue;
        }
        let x0 = i as u32 * MODULE_WIDTH_PX;
        for dx in 0..MODULE_WIDTH_PX {
            for y in 0..height {
                img.put_pixel(x0 + dx, y, Luma([0u8]));
            }
        }
    }

    img
}

fn encoding_error(value: &str, symbology: Symbology, reason: &str) -> LabelError {
    LabelError::Encoding {
        value: value.to_string(),
        symbology,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== check digit ====================

    #[test]
    fn test_ean13_check_digit_known_values() {
        // 4006381333931 is the classic EAN-13 sample value.
        assert_eq!(ean13_check_digit("400638133393"), 1);
        assert_eq!(ean13_check_digit("750103131130"), 9);
    }

    // ==================== EAN-13 acceptance ====================

    #[test]
    fn test_ean13_accepts_12_digits() {
        assert!(render("400638133393", Symbology::Ean13, 20).is_ok());
    }

    #[test]
    fn test_ean13_accepts_13_digits_with_valid_check() {
        assert!(render("4006381333931", Symbology::Ean13, 20).is_ok());
    }

    #[test]
    fn test_ean13_rejects_bad_check_digit() {
        let result = render("4006381333930", Symbology::Ean13, 20);
        assert!(matches!(result, Err(LabelError::Encoding { .. })));
    }

    #[test]
    fn test_ean13_rejects_non_numeric() {
        let result = render("abc", Symbology::Ean13, 20);
        assert!(matches!(result, Err(LabelError::Encoding { .. })));
    }

    #[test]
    fn test_ean13_rejects_wrong_length() {
        assert!(render("12345", Symbology::Ean13, 20).is_err());
        assert!(render("", Symbology::Ean13, 20).is_err());
    }

    // ==================== Code 128 acceptance ====================

    #[test]
    fn test_code128_accepts_alphanumerics() {
        // Exactly the kind of value EAN-13 rejects.
        assert!(render("CBL-0042", Symbology::Code128, 20).is_ok());
    }

    #[test]
    fn test_code128_rejects_non_ascii() {
        let result = render("über", Symbology::Code128, 20);
        assert!(matches!(result, Err(LabelError::Encoding { .. })));
    }

    #[test]
    fn test_code128_rejects_empty() {
        assert!(render("", Symbology::Code128, 20).is_err());
    }

    // ==================== raster geometry ====================

    #[test]
    fn test_raster_height_matches_request() {
        let img = render("400638133393", Symbology::Ean13, 20).unwrap();
        assert_eq!(img.height(), 20);
    }

    #[test]
    fn test_raster_width_follows_module_count() {
        let img = render("400638133393", Symbology::Ean13, 20).unwrap();
        // An EAN-13 symbol is 95 modules wide.
        assert_eq!(img.width(), 95 * MODULE_WIDTH_PX);
    }

    #[test]
    fn test_raster_contains_bars_and_spaces() {
        let img = render("400638133393", Symbology::Ean13, 20).unwrap();
        let pixels: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        assert!(pixels.contains(&0));
        assert!(pixels.contains(&255));
    }

    #[test]
    fn test_raster_is_deterministic() {
        let a = render("4006381333931", Symbology::Ean13, 20).unwrap();
        let b = render("4006381333931", Symbology::Ean13, 20).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_12_and_13_digit_forms_encode_identically() {
        let short = render("400638133393", Symbology::Ean13, 20).unwrap();
        let long = render("4006381333931", Symbology::Ean13, 20).unwrap();
        assert_eq!(short.as_raw(), long.as_raw());
    }
}

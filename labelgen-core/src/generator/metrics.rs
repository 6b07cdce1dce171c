//! Helvetica advance widths for text measurement.
//!
//! The layout engine centers text using measured widths. The builtin Type1
//! Helvetica has no font file to query at runtime, so the standard AFM
//! advance widths are tabled here.

use crate::config::PT_PER_MM;

/// Advance widths in 1/1000 em for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // space ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278, // * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, // A-J
    667, 556, 833, 722, 778, 667, 778, 722, 667, 611, // K-T
    722, 667, 944, 667, 667, 611, // U-Z
    278, 278, 278, 469, 556, 333, // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, // a-j
    500, 222, 833, 556, 556, 556, 556, 333, 500, 278, // k-t
    556, 500, 722, 500, 500, 500, // u-z
    334, 260, 334, 584, // { | } ~
];

/// Fallback advance for characters outside the table (the digit width).
const DEFAULT_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Measured width of `text` at `font_size`, in points.
pub fn string_width_pt(text: &str, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    f64::from(units) * font_size / 1000.0
}

/// Measured width of `text` at `font_size`, in mm, the unit the layout
/// engine works in.
pub fn string_width_mm(text: &str, font_size: f64) -> f64 {
    string_width_pt(text, font_size) / PT_PER_MM
}

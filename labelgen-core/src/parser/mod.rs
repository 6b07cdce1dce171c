//! CSV input: file gate plus tokenization into raw rows.

mod rows;

pub use rows::{is_csv_path, parse_rows, read_rows};

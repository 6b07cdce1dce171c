//! Sheet-shape validation.

mod validate;

pub use validate::{validate_rows, INVALID_HEADER_MESSAGE, NO_DATA_ROWS_MESSAGE};

//! PDF assembly: font metrics, document primitives, and the label pipeline.

mod document;
mod metrics;
mod pdf;

pub use document::LabelDocument;
pub use metrics::{string_width_mm, string_width_pt};
pub use pdf::assemble_pdf;

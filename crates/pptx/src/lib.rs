//! PPTX (Office Open XML) support for the training deck.
//!
//! [`PptxWriter`] serializes an authored deck into a `.pptx` package and
//! [`PptxParser`] reads any `.pptx` back into its visible text, recovering
//! the segment/layout tag of every slide the writer produced.

pub mod parser;
mod templates;
pub mod writer;

pub use parser::PptxParser;
pub use writer::PptxWriter;

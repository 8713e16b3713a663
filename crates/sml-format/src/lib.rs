//! Writer for SML documents.
//!
//! Renders a [`Document`](sml_tree::Document) to any [`std::fmt::Write`]
//! sink. Text is escaped through an [`EncodeSet`]; every element is written
//! as an explicit open tag, content and close tag.

#[macro_use]
mod tracing_macros;

mod options;
mod writer;

pub use options::WriterOptions;
pub use sml_tokenizer::EncodeSet;
pub use writer::Writer;

/// Render a document to a string with the given options.
pub fn to_string(doc: &sml_tree::Document, options: WriterOptions) -> String {
    Writer::new(options).write_string(doc)
}

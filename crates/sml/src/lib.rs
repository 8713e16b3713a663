//! Read and write SML, a small attribute-free markup language, and the
//! structured values encoded in it.
//!
//! # Reading and writing markup
//!
//! ```
//! use sml::{Document, Node};
//!
//! let doc = sml::read("<tag><tag>content</tag></tag>").unwrap();
//! assert_eq!(
//!     doc,
//!     Document::from_nodes([Node::element("tag", [Node::element("tag", [Node::text("content")])])])
//! );
//! assert_eq!(sml::write_compressed(&doc), "<tag><tag>content</></>");
//! ```
//!
//! # Values
//!
//! ```
//! use sml::Value;
//!
//! let value = Value::from(vec![1u8, 2, 3]);
//! let markup = sml::write_value(&value).unwrap();
//! assert_eq!(markup, "<list><number>1</number><number>2</number><number>3</number></list>");
//! assert_eq!(sml::read_value(&markup).unwrap(), value);
//! ```

mod error;

use std::fmt;

pub use error::{Error, Result};
pub use sml_format::{EncodeSet, Writer, WriterOptions};
pub use sml_parse::{
    DecodeSet, Position, ReadError, Reader, ReaderConfig, SyntaxError, SyntaxErrorKind,
};
pub use sml_tree::{
    ClosingPolicy, Document, ElementRef, Item, ItemRef, Node, NodeId, StructuralError,
};
pub use sml_value::{
    DecodeOptions, Value, ValueError, decode, decode_node, decode_with, encode, encode_node,
};

/// Read markup with the default configuration.
pub fn read(source: &str) -> Result<Document> {
    read_with(source, ReaderConfig::default())
}

/// Read markup, raising on anything unexpected.
pub fn read_strict(source: &str) -> Result<Document> {
    read_with(source, ReaderConfig::strict())
}

/// Read markup without ever failing.
pub fn read_ignore(source: &str) -> Result<Document> {
    read_with(source, ReaderConfig::ignore())
}

/// Read markup with an explicit configuration.
pub fn read_with(source: &str, config: ReaderConfig) -> Result<Document> {
    Ok(Reader::new(config).read_str(source)?)
}

/// Write a document with the default options.
pub fn write(doc: &Document) -> String {
    write_with(doc, WriterOptions::default())
}

/// Write a document with anonymous close tags.
pub fn write_compressed(doc: &Document) -> String {
    write_with(doc, WriterOptions::compress())
}

/// Write a document one item per line, indented.
pub fn write_beautified(doc: &Document) -> String {
    write_with(doc, WriterOptions::beautify())
}

/// Write a document with explicit options.
pub fn write_with(doc: &Document, options: WriterOptions) -> String {
    Writer::new(options).write_string(doc)
}

/// Write a document into any sink.
pub fn write_to<W: fmt::Write>(doc: &Document, sink: W, options: WriterOptions) -> Result<W> {
    Ok(Writer::new(options).write(doc, sink)?)
}

/// Read markup and decode the value it holds.
pub fn read_value(source: &str) -> Result<Value> {
    Ok(decode(&read(source)?)?)
}

/// Encode a value and write it with the default options.
pub fn write_value(value: &Value) -> Result<String> {
    Ok(write(&encode(value)?))
}

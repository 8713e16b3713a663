//! Reader for SML: turns a character source into a [`Document`].
//!
//! ```
//! use sml_parse::{Reader, ReaderConfig};
//! use sml_tree::{Document, Node};
//!
//! let doc = Reader::new(ReaderConfig::default())
//!     .read_str("<tag>1&lt;2</tag>")
//!     .unwrap();
//! assert_eq!(doc, Document::from_nodes([Node::element("tag", [Node::text("1<2")])]));
//! ```

mod config;
mod diagnostic;
mod error;
mod reader;

pub use config::ReaderConfig;
pub use error::{ReadError, SyntaxError, SyntaxErrorKind};
pub use reader::Reader;
pub use sml_tokenizer::{DecodeSet, Position};
pub use sml_tree::{ClosingPolicy, Document, StructuralError};

/// Read a string with the given configuration.
pub fn read_str(source: &str, config: ReaderConfig) -> Result<Document, ReadError> {
    Reader::new(config).read_str(source)
}

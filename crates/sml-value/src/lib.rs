//! Structured values written as SML element trees.
//!
//! Values map onto a small element vocabulary: `nil`, `true`, `false`,
//! `text`, `number`, `list`, `set`, `map` and `dictionairy`, with map and
//! dictionary entries written as `<entry>key<value>payload</value></entry>`.
//!
//! ```
//! use sml_value::{Value, decode, encode};
//!
//! let value = Value::List(vec![Value::Number(1.0), Value::Text("two".into())]);
//! let doc = encode(&value).unwrap();
//! assert_eq!(decode(&doc).unwrap(), value);
//! ```
//!
//! Map and dictionary payloads are not decoded along with their keys; they
//! come back as [`Value::Raw`] nodes that [`decode_node`] turns into values
//! on demand.

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{DecodeOptions, decode, decode_node, decode_node_with, decode_with};
pub use encode::{encode, encode_node};
pub use error::ValueError;
pub use value::Value;

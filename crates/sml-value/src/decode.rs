//! Element trees to values.

use sml_tree::{Document, Node};
use tracing::trace;

use crate::value::{push_unique, upsert};
use crate::{Value, ValueError};

/// Decoding options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Ignore whitespace-only text between the children of collections and
    /// entries, and around top-level items. Lets beautified output decode.
    pub skip_whitespace: bool,
}

impl DecodeOptions {
    /// Set [`DecodeOptions::skip_whitespace`].
    pub fn skip_whitespace(mut self, skip: bool) -> Self {
        self.skip_whitespace = skip;
        self
    }
}

/// Decode a document.
///
/// A document with a single item decodes that item. Several items come back
/// as a [`Value::List`] of undecoded [`Value::Raw`] nodes.
///
/// Values are owned recursive trees and decoding recurses once per nested
/// collection, so nesting a few thousand levels deep can exhaust the stack.
/// Keep such documents as a [`Document`].
pub fn decode(doc: &Document) -> Result<Value, ValueError> {
    decode_with(doc, DecodeOptions::default())
}

/// Decode a document with options.
pub fn decode_with(doc: &Document, options: DecodeOptions) -> Result<Value, ValueError> {
    let decoder = Decoder { options };
    let mut items = decoder.structural(doc.to_nodes());
    match items.len() {
        0 => Err(ValueError::EmptyDocument),
        1 => decoder.node(&items.remove(0)),
        n => {
            trace!("document holds {} items, keeping them raw", n);
            Ok(Value::List(items.into_iter().map(Value::Raw).collect()))
        }
    }
}

/// Decode a single node.
///
/// Recurses per nesting level, like [`decode`].
pub fn decode_node(node: &Node) -> Result<Value, ValueError> {
    decode_node_with(node, DecodeOptions::default())
}

/// Decode a single node with options.
pub fn decode_node_with(node: &Node, options: DecodeOptions) -> Result<Value, ValueError> {
    Decoder { options }.node(node)
}

struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    fn node(&self, node: &Node) -> Result<Value, ValueError> {
        let (name, content) = match node {
            Node::Text(text) => return Ok(Value::Text(text.clone())),
            Node::Element { name, content } => (name.as_str(), content.as_slice()),
        };
        trace!("decode <{}>", name);
        match name {
            "nil" => Ok(Value::Nil),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "text" => match content {
                [] => Ok(Value::Text(String::new())),
                [Node::Text(text)] => Ok(Value::Text(text.clone())),
                _ => Err(ValueError::InvalidText),
            },
            "number" => match content {
                [Node::Text(text)] => text
                    .trim()
                    .parse()
                    .map(Value::Number)
                    .map_err(|_| ValueError::InvalidNumber),
                _ => Err(ValueError::InvalidNumber),
            },
            "list" => self
                .children(content)
                .map(|child| self.node(child))
                .collect::<Result<_, _>>()
                .map(Value::List),
            "set" => {
                let mut members = Vec::new();
                for child in self.children(content) {
                    push_unique(&mut members, self.node(child)?);
                }
                Ok(Value::Set(members))
            }
            "map" => {
                let mut entries = Vec::new();
                for child in self.children(content) {
                    let (key, value) = self.entry(child)?;
                    upsert(&mut entries, key, value);
                }
                Ok(Value::Map(entries))
            }
            "dictionairy" => {
                let mut entries = Vec::new();
                for child in self.children(content) {
                    let (key, value) = self.entry(child)?;
                    let Value::Text(key) = key else {
                        return Err(ValueError::InvalidKey);
                    };
                    upsert(&mut entries, key, value);
                }
                Ok(Value::Dictionary(entries))
            }
            other => Err(ValueError::UnknownElement(other.to_string())),
        }
    }

    /// Decode the key of an `entry` and lift its payload out raw.
    fn entry(&self, node: &Node) -> Result<(Value, Value), ValueError> {
        if node.name() != Some("entry") {
            return Err(ValueError::InvalidEntry);
        }
        let items: Vec<&Node> = self.children(node.content()).collect();
        let [key, wrapper] = items.as_slice() else {
            return Err(ValueError::InvalidEntry);
        };
        if wrapper.name() != Some("value") {
            return Err(ValueError::InvalidEntry);
        }
        let payload: Vec<&Node> = self.children(wrapper.content()).collect();
        let [payload] = payload.as_slice() else {
            return Err(ValueError::InvalidEntry);
        };
        Ok((self.node(key)?, Value::Raw((*payload).clone())))
    }

    fn children<'a>(&self, content: &'a [Node]) -> impl Iterator<Item = &'a Node> + 'a {
        let skip = self.options.skip_whitespace;
        content.iter().filter(move |node| !(skip && node.is_whitespace()))
    }

    fn structural(&self, nodes: Vec<Node>) -> Vec<Node> {
        let skip = self.options.skip_whitespace;
        nodes
            .into_iter()
            .filter(|node| !(skip && node.is_whitespace()))
            .collect()
    }
}

//! Values to element trees.

use sml_tree::{Document, Node};
use tracing::trace;

use crate::{Value, ValueError};

/// Encode a value as a one-item document.
pub fn encode(value: &Value) -> Result<Document, ValueError> {
    let node = encode_node(value)?;
    Ok(Document::from_nodes([node]))
}

/// Encode a value as a single node.
///
/// Fails only on a [`Value::Raw`] text run that is empty or that would sit
/// next to another text run in a list or set, where the two would merge into
/// one. Recurses per nesting level.
pub fn encode_node(value: &Value) -> Result<Node, ValueError> {
    Ok(match value {
        Value::Nil => Node::empty("nil"),
        Value::Bool(true) => Node::empty("true"),
        Value::Bool(false) => Node::empty("false"),
        Value::Number(n) => Node::element("number", [Node::text(n.to_string())]),
        Value::Text(text) => Node::element("text", [Node::text(text.as_str())]),
        Value::List(items) => Node::element("list", encode_all(items)?),
        Value::Set(members) => Node::element("set", encode_all(members)?),
        Value::Map(entries) => {
            let entries = entries
                .iter()
                .map(|(key, value)| entry(encode_node(key)?, value))
                .collect::<Result<Vec<_>, _>>()?;
            Node::element("map", entries)
        }
        Value::Dictionary(entries) => {
            let entries = entries
                .iter()
                .map(|(key, value)| entry(Node::element("text", [Node::text(key.as_str())]), value))
                .collect::<Result<Vec<_>, _>>()?;
            Node::element("dictionairy", entries)
        }
        Value::Raw(Node::Text(text)) if text.is_empty() => return Err(ValueError::InvalidRaw),
        Value::Raw(node) => node.clone(),
    })
}

fn encode_all(values: &[Value]) -> Result<Vec<Node>, ValueError> {
    let mut nodes: Vec<Node> = Vec::with_capacity(values.len());
    for value in values {
        let node = encode_node(value)?;
        // Only raw payloads encode as bare text.
        if matches!((nodes.last(), &node), (Some(Node::Text(_)), Node::Text(_))) {
            return Err(ValueError::InvalidRaw);
        }
        nodes.push(node);
    }
    Ok(nodes)
}

fn entry(key: Node, value: &Value) -> Result<Node, ValueError> {
    trace!("entry {:?}", key);
    let value = Node::element("value", [encode_node(value)?]);
    Ok(Node::element("entry", [key, value]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn el(name: &str, content: impl IntoIterator<Item = Node>) -> Node {
        Node::element(name, content)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode_node(&Value::Nil), Ok(Node::empty("nil")));
        assert_eq!(encode_node(&Value::Bool(false)), Ok(Node::empty("false")));
        assert_eq!(
            encode_node(&Value::Number(1.0)),
            Ok(el("number", [Node::text("1")]))
        );
        assert_eq!(
            encode_node(&Value::Number(-0.25)),
            Ok(el("number", [Node::text("-0.25")]))
        );
        assert_eq!(encode_node(&Value::Text(String::new())), Ok(Node::empty("text")));
    }

    #[test]
    fn test_map_entries_wrap_the_value() {
        let map = Value::Map(vec![(Value::Bool(true), Value::Text("yes".into()))]);
        assert_eq!(
            encode_node(&map),
            Ok(el(
                "map",
                [el(
                    "entry",
                    [
                        Node::empty("true"),
                        el("value", [el("text", [Node::text("yes")])]),
                    ]
                )]
            ))
        );
    }

    #[test]
    fn test_dictionary_keys_are_text_elements() {
        let dict = Value::dictionary([("k", Value::Nil)]);
        assert_eq!(
            encode_node(&dict),
            Ok(el(
                "dictionairy",
                [el(
                    "entry",
                    [el("text", [Node::text("k")]), el("value", [Node::empty("nil")])]
                )]
            ))
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node = el("anything", [Node::text("goes")]);
        assert_eq!(encode_node(&Value::Raw(node.clone())), Ok(node));
        assert_eq!(
            encode(&Value::List(vec![Value::Raw(Node::text(""))])),
            Err(ValueError::InvalidRaw)
        );
    }

    #[test]
    fn test_adjacent_raw_text_is_rejected() {
        let text = |t: &str| Value::Raw(Node::text(t));
        assert_eq!(
            encode(&Value::List(vec![text("a"), text("b")])),
            Err(ValueError::InvalidRaw)
        );
        assert_eq!(
            encode(&Value::Set(vec![Value::Nil, text("a"), text("b")])),
            Err(ValueError::InvalidRaw)
        );
        // Separated by an element, each run stays its own item.
        assert_eq!(
            encode_node(&Value::List(vec![text("a"), Value::Nil, text("b")])),
            Ok(el("list", [Node::text("a"), Node::empty("nil"), Node::text("b")]))
        );
    }

    #[test]
    fn test_encode_document() {
        let doc = encode(&Value::Text("x".into())).unwrap();
        assert_eq!(doc, Document::from_nodes([el("text", [Node::text("x")])]));
    }
}

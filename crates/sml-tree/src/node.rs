//! Owned subtrees.

/// An owned markup node without parent links.
///
/// Used to write documents down literally, to lift a subtree out of a
/// [`Document`](crate::Document), and to carry undecoded payloads around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A text run.
    Text(String),
    /// A named element and its content.
    Element {
        /// Element name.
        name: String,
        /// Ordered content; adjacent text runs are merged.
        content: Vec<Node>,
    },
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Create an element, merging adjacent text runs and dropping empty ones.
    pub fn element(name: impl Into<String>, content: impl IntoIterator<Item = Node>) -> Self {
        Node::Element {
            name: name.into(),
            content: coalesce(content),
        }
    }

    /// Create an element with no content.
    pub fn empty(name: impl Into<String>) -> Self {
        Node::Element {
            name: name.into(),
            content: Vec::new(),
        }
    }

    /// Element name, `None` for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Text(_) => None,
            Node::Element { name, .. } => Some(name),
        }
    }

    /// Text of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element { .. } => None,
        }
    }

    /// Content of an element; empty for text.
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element { content, .. } => content,
        }
    }

    /// Whether this is a text run made only of whitespace.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(text) if text.chars().all(char::is_whitespace))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

pub(crate) fn coalesce(content: impl IntoIterator<Item = Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    for node in content {
        if let Node::Text(text) = &node {
            if text.is_empty() {
                continue;
            }
            if let Some(Node::Text(last)) = out.last_mut() {
                last.push_str(text);
                continue;
            }
        }
        out.push(node);
    }
    out
}

//! Arena-backed element tree.

use crate::Node;

/// Handle to an element inside a [`Document`].
///
/// Handles are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the element in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry in an element's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A non-empty text run.
    Text(String),
    /// A child element.
    Element(NodeId),
}

#[derive(Debug, Clone)]
struct Slot {
    name: Option<String>,
    parent: Option<NodeId>,
    content: Vec<Item>,
}

/// An SML document: an unnamed, parentless root element plus everything
/// below it.
///
/// Trees only grow. Text appended after a text run is merged into it, so two
/// text items are never adjacent.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                name: None,
                parent: None,
                content: Vec::new(),
            }],
        }
    }

    /// Build a document whose top level holds `nodes`.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut doc = Document::new();
        let root = doc.root();
        for node in nodes {
            doc.append_node(root, &node);
        }
        doc
    }

    /// The root element.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Element name; `None` for the root.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.slot(id).name.as_deref()
    }

    /// Parent element; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// Ordered content of an element.
    pub fn content(&self, id: NodeId) -> &[Item] {
        &self.slot(id).content
    }

    /// Element children of an element, skipping text.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.content(id).iter().filter_map(|item| match item {
            Item::Element(child) => Some(*child),
            Item::Text(_) => None,
        })
    }

    /// Borrowed view of an element.
    pub fn get(&self, id: NodeId) -> ElementRef<'_> {
        ElementRef { doc: self, id }
    }

    /// Number of top-level items.
    pub fn len(&self) -> usize {
        self.content(self.root()).len()
    }

    /// Whether the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements, the root included.
    pub fn element_count(&self) -> usize {
        self.slots.len()
    }

    /// Append text to an element, merging it into a trailing text run.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        let content = &mut self.slot_mut(id).content;
        match content.last_mut() {
            Some(Item::Text(last)) => last.push_str(text),
            _ => content.push(Item::Text(text.to_string())),
        }
    }

    /// Append a new, empty child element and return its handle.
    pub fn append_element(&mut self, id: NodeId, name: impl Into<String>) -> NodeId {
        let child = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            name: Some(name.into()),
            parent: Some(id),
            content: Vec::new(),
        });
        self.slot_mut(id).content.push(Item::Element(child));
        child
    }

    /// Copy an owned subtree under an element.
    pub fn append_node(&mut self, id: NodeId, node: &Node) {
        let mut open = vec![(id, std::slice::from_ref(node).iter())];
        while let Some((parent, nodes)) = open.last_mut() {
            let parent = *parent;
            match nodes.next() {
                Some(Node::Text(text)) => self.append_text(parent, text),
                Some(Node::Element { name, content }) => {
                    let child = self.append_element(parent, name.as_str());
                    open.push((child, content.iter()));
                }
                None => {
                    open.pop();
                }
            }
        }
    }

    /// Lift an element and its content out as an owned [`Node`].
    ///
    /// The root has no name; use [`Document::to_nodes`] for it. Owned nodes
    /// are recursive, so very deep subtrees are better walked in place
    /// through [`ElementRef`].
    pub fn to_node(&self, id: NodeId) -> Node {
        Node::Element {
            name: self.name(id).unwrap_or_default().to_string(),
            content: self.nodes_of(id),
        }
    }

    /// The top-level items as owned nodes.
    pub fn to_nodes(&self) -> Vec<Node> {
        self.nodes_of(self.root())
    }

    fn nodes_of(&self, id: NodeId) -> Vec<Node> {
        // Each open element with the nodes built for it so far.
        let mut open = vec![(id, self.content(id).iter(), Vec::new())];
        while let Some((_, items, built)) = open.last_mut() {
            match items.next() {
                Some(Item::Text(text)) => built.push(Node::Text(text.clone())),
                Some(Item::Element(child)) => {
                    open.push((*child, self.content(*child).iter(), Vec::new()));
                }
                None => {
                    let Some((done, _, content)) = open.pop() else {
                        break;
                    };
                    let Some((_, _, parent)) = open.last_mut() else {
                        return content;
                    };
                    parent.push(Node::Element {
                        name: self.name(done).unwrap_or_default().to_string(),
                        content,
                    });
                }
            }
        }
        Vec::new()
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.index()]
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        &mut self.slots[id.index()]
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Documents are equal when their content is, whatever the arena layout.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.get(self.root()) == other.get(other.root())
    }
}

impl Eq for Document {}

/// A borrowed element.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

/// A borrowed content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef<'a> {
    /// A text run.
    Text(&'a str),
    /// A child element.
    Element(ElementRef<'a>),
}

impl<'a> ElementRef<'a> {
    /// The element's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The document the element belongs to.
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Element name; `None` for the root.
    pub fn name(&self) -> Option<&'a str> {
        self.doc.name(self.id)
    }

    /// Parent element.
    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.doc.parent(self.id).map(|id| self.doc.get(id))
    }

    /// Content items in order.
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'a>> + 'a {
        let doc = self.doc;
        doc.content(self.id).iter().map(move |item| match item {
            Item::Text(text) => ItemRef::Text(text),
            Item::Element(child) => ItemRef::Element(doc.get(*child)),
        })
    }

    /// Element children, skipping text.
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let doc = self.doc;
        doc.children(self.id).map(move |id| doc.get(id))
    }

    /// Number of content items.
    pub fn len(&self) -> usize {
        self.doc.content(self.id).len()
    }

    /// Whether the element has no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text when the content is exactly one text run.
    pub fn text(&self) -> Option<&'a str> {
        match self.doc.content(self.id) {
            [Item::Text(text)] => Some(text),
            _ => None,
        }
    }

    /// Owned copy of this element.
    pub fn to_node(&self) -> Node {
        self.doc.to_node(self.id)
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(*self, *other)];
        while let Some((a, b)) = pending.pop() {
            if a.name() != b.name() || a.len() != b.len() {
                return false;
            }
            for pair in a.items().zip(b.items()) {
                match pair {
                    (ItemRef::Text(x), ItemRef::Text(y)) if x == y => {}
                    (ItemRef::Element(x), ItemRef::Element(y)) => pending.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for ElementRef<'_> {}

impl<'a> ItemRef<'a> {
    /// Owned copy of this item.
    pub fn to_node(&self) -> Node {
        match self {
            ItemRef::Text(text) => Node::text(*text),
            ItemRef::Element(element) => element.to_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_append_text_coalesces() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append_text(root, "con");
        doc.append_text(root, "");
        doc.append_text(root, "tent");
        assert_eq!(doc.content(root), &[Item::Text("content".into())]);
    }

    #[test]
    fn test_append_element_sets_parent() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append_text(root, "a");
        let tag = doc.append_element(root, "tag");
        doc.append_text(root, "b");
        let inner = doc.append_element(tag, "inner");

        assert_eq!(doc.parent(tag), Some(root));
        assert_eq!(doc.parent(inner), Some(tag));
        assert_eq!(doc.parent(root), None);
        assert_eq!(doc.name(root), None);
        assert_eq!(doc.name(inner), Some("inner"));
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.children(root).collect::<Vec<_>>(), vec![tag]);
        assert_eq!(doc.element_count(), 3);
    }

    #[test]
    fn test_text_after_element_starts_new_run() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append_text(root, "a");
        doc.append_element(root, "x");
        doc.append_text(root, "b");
        doc.append_text(root, "c");
        let texts: Vec<_> = doc
            .get(root)
            .items()
            .filter_map(|item| match item {
                ItemRef::Text(text) => Some(text),
                ItemRef::Element(_) => None,
            })
            .collect();
        assert_eq!(texts, vec!["a", "bc"]);
    }

    #[test]
    fn test_nodes_round_trip() {
        let nodes = vec![
            Node::element("tag", [Node::element("tag", [Node::text("content")])]),
            Node::text("tail"),
        ];
        let doc = Document::from_nodes(nodes.clone());
        assert_eq!(doc.to_nodes(), nodes);

        let tag = doc.children(doc.root()).next().unwrap();
        assert_eq!(doc.to_node(tag), nodes[0]);
        assert_eq!(doc.get(tag).children().next().unwrap().text(), Some("content"));
    }

    #[test]
    fn test_equality_ignores_arena_layout() {
        // Same tree, built in a different order.
        let mut a = Document::new();
        let root = a.root();
        let first = a.append_element(root, "a");
        let second = a.append_element(root, "b");
        a.append_text(second, "2");
        a.append_text(first, "1");

        let b = Document::from_nodes([
            Node::element("a", [Node::text("1")]),
            Node::element("b", [Node::text("2")]),
        ]);
        assert_eq!(a, b);
        assert_ne!(a, Document::from_nodes([Node::text("1")]));
    }

    fn nested(depth: usize, text: &str) -> Document {
        let mut doc = Document::new();
        let mut id = doc.root();
        for _ in 0..depth {
            id = doc.append_element(id, "a");
        }
        doc.append_text(id, text);
        doc
    }

    #[test]
    fn test_deep_nesting_compares_without_recursion() {
        let doc = nested(200_000, "x");
        assert_eq!(doc, doc.clone());
        assert_ne!(doc, nested(200_000, "y"));
        assert_ne!(doc, nested(199_999, "x"));
    }

    #[test]
    fn test_deep_subtree_copies_out_and_back() {
        let doc = nested(500, "x");
        let top = doc.children(doc.root()).next().unwrap();
        let rebuilt = Document::from_nodes([doc.to_node(top)]);
        assert_eq!(rebuilt, doc);
        assert_eq!(rebuilt.element_count(), 501);
    }

    #[test]
    fn test_element_ref() {
        let doc = Document::from_nodes([Node::element("p", [Node::text("hi"), Node::empty("br")])]);
        let p = doc.get(doc.root()).children().next().unwrap();
        assert_eq!(p.name(), Some("p"));
        assert_eq!(p.len(), 2);
        assert_eq!(p.text(), None);
        assert_eq!(p.parent().and_then(|parent| parent.name()), None);
        assert!(p.children().next().unwrap().is_empty());
    }
}

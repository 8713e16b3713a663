//! Tree construction.

use tracing::{debug, trace};

use crate::closing::close_one;
use crate::{ClosingPolicy, Document, NodeId, StructuralError};

/// Builds a [`Document`], tracking the active (innermost open) element.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    doc: Document,
    active: NodeId,
    policy: ClosingPolicy,
}

impl TreeBuilder {
    /// Start a new document; close tags are resolved with `policy`.
    pub fn new(policy: ClosingPolicy) -> Self {
        let doc = Document::new();
        let active = doc.root();
        Self {
            doc,
            active,
            policy,
        }
    }

    /// The innermost open element.
    pub fn active(&self) -> NodeId {
        self.active
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Append text to the active element.
    pub fn text(&mut self, text: &str) {
        self.doc.append_text(self.active, text);
    }

    /// Append a child to the active element and make it active.
    pub fn open(&mut self, name: impl Into<String>) -> NodeId {
        let child = self.doc.append_element(self.active, name);
        trace!("open <{}>", self.doc.name(child).unwrap_or_default());
        self.active = child;
        child
    }

    /// Append an empty child to the active element.
    pub fn append_empty(&mut self, name: impl Into<String>) -> NodeId {
        let child = self.doc.append_element(self.active, name);
        trace!("empty <{}/>", self.doc.name(child).unwrap_or_default());
        child
    }

    /// Resolve `</name>` with the configured policy.
    pub fn close(&mut self, name: &str) -> Result<(), StructuralError> {
        let next = self.policy.resolve(&self.doc, self.active, name)?;
        if next == self.active {
            debug!(policy = %self.policy, "</{}> closed nothing", name);
        }
        trace!("close </{}>", name);
        self.active = next;
        Ok(())
    }

    /// Close the active element without naming it (`</>`).
    pub fn close_active(&mut self) {
        if self.active == self.doc.root() {
            debug!("</> at document level closed nothing");
        }
        self.active = close_one(&self.doc, self.active);
    }

    /// Finish building. Elements still open are kept as they are.
    pub fn finish(self) -> Document {
        self.doc
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(ClosingPolicy::default())
    }
}

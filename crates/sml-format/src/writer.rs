//! SML output writer.

use std::fmt::{self, Write};

use sml_tokenizer::entities;
use sml_tree::{Document, Item, Node};

use crate::WriterOptions;

/// An element whose content is being written.
struct Frame<'a> {
    name: Option<&'a str>,
    items: std::slice::Iter<'a, Item>,
    depth: usize,
}

/// Renders documents as SML markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Writer {
    options: WriterOptions,
}

impl Writer {
    /// Create a writer with the given options.
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    /// The writer's options.
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Write `doc` to `out` and hand the sink back.
    ///
    /// The traversal keeps its own stack, so nesting depth is bounded by
    /// memory rather than by the call stack.
    pub fn write<W: Write>(&self, doc: &Document, mut out: W) -> Result<W, fmt::Error> {
        trace!("writing {} top-level items", doc.len());
        let spacing = self.options.spacing;
        let root = doc.root();
        let mut open = vec![Frame {
            name: None,
            items: doc.content(root).iter(),
            depth: 0,
        }];
        out.write_str(spacing)?;
        while let Some(frame) = open.last_mut() {
            let Some(item) = frame.items.next() else {
                // The root has no close tag.
                if let Some(Frame { name: Some(name), .. }) = open.pop() {
                    self.write_close(name, &mut out)?;
                    out.write_str(spacing)?;
                }
                continue;
            };
            self.write_indent(frame.depth, &mut out)?;
            match item {
                Item::Text(text) => {
                    out.write_str(&entities::escape(self.options.escape_set, text))?;
                    out.write_str(spacing)?;
                }
                Item::Element(child) => {
                    let name = doc.name(*child).unwrap_or_default();
                    let depth = frame.depth + 1;
                    trace!("write <{}> at depth {}", name, depth);
                    write!(out, "<{name}>")?;
                    out.write_str(spacing)?;
                    open.push(Frame {
                        name: Some(name),
                        items: doc.content(*child).iter(),
                        depth,
                    });
                }
            }
        }
        Ok(out)
    }

    /// Write a single owned node as if it were a one-item document.
    pub fn write_node<W: Write>(&self, node: &Node, out: W) -> Result<W, fmt::Error> {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append_node(root, node);
        self.write(&doc, out)
    }

    /// Render `doc` to a new string.
    pub fn write_string(&self, doc: &Document) -> String {
        let mut out = String::new();
        // Writing to a String can't fail.
        let _ = self.write(doc, &mut out);
        out
    }

    // Close tags are never indented.
    fn write_close<W: Write>(&self, name: &str, out: &mut W) -> fmt::Result {
        if self.options.autoclose {
            out.write_str("</>")
        } else {
            write!(out, "</{name}>")
        }
    }

    fn write_indent<W: Write>(&self, depth: usize, out: &mut W) -> fmt::Result {
        if let Some(indent) = self.options.indent {
            for _ in 0..depth {
                out.write_str(indent)?;
            }
        }
        Ok(())
    }
}

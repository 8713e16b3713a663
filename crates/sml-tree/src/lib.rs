//! Element tree for SML documents.
//!
//! A [`Document`] is an arena of elements addressed by [`NodeId`]; every
//! element keeps a link to its parent so the reader can walk the chain of
//! open elements. [`Node`] is the owned, parent-free form of a subtree.
//! [`TreeBuilder`] drives construction and resolves close tags through a
//! [`ClosingPolicy`].

mod builder;
mod closing;
mod document;
mod error;
mod node;

pub use builder::TreeBuilder;
pub use closing::{ClosingPolicy, UnknownPolicy};
pub use document::{Document, ElementRef, Item, ItemRef, NodeId};
pub use error::StructuralError;
pub use node::Node;

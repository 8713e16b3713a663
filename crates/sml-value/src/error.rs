//! Value codec errors.

/// A document that doesn't follow the value vocabulary, or a value that
/// can't be written as one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A `text` element with more than one item, or a non-text item.
    #[error("invalid text")]
    InvalidText,

    /// A `number` element without exactly one parseable text run.
    #[error("invalid number")]
    InvalidNumber,

    /// An `entry` that isn't a key followed by a `value` wrapper holding one item.
    #[error("invalid entry")]
    InvalidEntry,

    /// A dictionary key that doesn't decode to text.
    #[error("dictionary keys must be text")]
    InvalidKey,

    /// A document with nothing in it.
    #[error("empty document")]
    EmptyDocument,

    /// An element outside the value vocabulary.
    #[error("unknown element `{0}`")]
    UnknownElement(String),

    /// A raw text payload that writes nothing or merges into its neighbour.
    #[error("raw payload is an empty or adjacent text run")]
    InvalidRaw,
}

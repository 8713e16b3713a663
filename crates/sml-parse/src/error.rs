//! Reader errors.

use sml_tokenizer::Position;
use sml_tree::StructuralError;

/// Malformed markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Where the reader gave up: the offending character, or the end of input.
    pub position: Position,
    /// Where the offending tag, entity or comment started.
    pub start: Position,
}

/// The kind of a [`SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A tag or comment opener that doesn't follow the grammar.
    #[error("invalid tag")]
    InvalidTag,
    /// An entity that doesn't follow the grammar.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A well-formed named entity missing from the entity table.
    #[error("unknown entity `&{0};`")]
    UnknownEntity(String),
    /// A numeric entity that isn't a Unicode scalar value.
    #[error("invalid character reference `&#{0};`")]
    InvalidCodePoint(String),
    /// A comment still open at end of input.
    #[error("unclosed comment")]
    UnclosedComment,
    /// A tag or entity cut short by the end of input.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Anything that makes [`Reader::read`](crate::Reader::read) fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// Malformed markup.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A close tag the closing policy refused.
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

impl ReadError {
    /// The syntax error, if that's what this is.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ReadError::Syntax(err) => Some(err),
            ReadError::Structural(_) => None,
        }
    }
}

//! Reader configuration.

use sml_tokenizer::DecodeSet;
use sml_tree::ClosingPolicy;

/// How strictly the reader treats its input.
///
/// Configurations are plain values; build one from a preset and adjust it
/// with the `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    /// Raise on malformed tags and entities instead of keeping them as text.
    pub strict_tag: bool,
    /// Raise on a comment left open at end of input instead of dropping it.
    pub strict_comment: bool,
    /// Raise on unknown or out-of-range entities instead of dropping them.
    pub strict_escape: bool,
    /// How `</name>` is matched against the open elements.
    pub closing: ClosingPolicy,
    /// Named entities understood by the reader.
    pub escape_set: DecodeSet,
}

impl Default for ReaderConfig {
    /// Lenient tags, strict entities and comments.
    fn default() -> Self {
        Self {
            strict_tag: false,
            strict_comment: true,
            strict_escape: true,
            closing: ClosingPolicy::ForcingSearching,
            escape_set: DecodeSet::Html,
        }
    }
}

impl ReaderConfig {
    /// Raise on anything unexpected; only the minimal entities are known.
    pub fn strict() -> Self {
        Self {
            strict_tag: true,
            strict_comment: true,
            strict_escape: true,
            closing: ClosingPolicy::Strict,
            escape_set: DecodeSet::Minimal,
        }
    }

    /// Never raise.
    pub fn ignore() -> Self {
        Self {
            strict_tag: false,
            strict_comment: false,
            strict_escape: false,
            closing: ClosingPolicy::ForcingSearching,
            escape_set: DecodeSet::Html,
        }
    }

    /// Look a preset up by name: `default`, `strict` or `ignore`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "ignore" => Some(Self::ignore()),
            _ => None,
        }
    }

    /// Set `strict_tag`.
    pub fn with_strict_tag(mut self, strict: bool) -> Self {
        self.strict_tag = strict;
        self
    }

    /// Set `strict_comment`.
    pub fn with_strict_comment(mut self, strict: bool) -> Self {
        self.strict_comment = strict;
        self
    }

    /// Set `strict_escape`.
    pub fn with_strict_escape(mut self, strict: bool) -> Self {
        self.strict_escape = strict;
        self
    }

    /// Set the closing policy.
    pub fn with_closing(mut self, closing: ClosingPolicy) -> Self {
        self.closing = closing;
        self
    }

    /// Set the entity table.
    pub fn with_escape_set(mut self, escape_set: DecodeSet) -> Self {
        self.escape_set = escape_set;
        self
    }
}

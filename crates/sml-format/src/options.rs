//! Formatting options for SML output.

use sml_tokenizer::EncodeSet;

/// Options for the [`Writer`](crate::Writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriterOptions {
    /// Prefix written once per nesting level before each item (default: none)
    pub indent: Option<&'static str>,

    /// Written at the start of an element's content and after every item
    /// (default: "")
    pub spacing: &'static str,

    /// Write close tags as `</>` instead of `</name>` (default: false)
    pub autoclose: bool,

    /// Entities used to escape text (default: minimal)
    pub escape_set: EncodeSet,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: None,
            spacing: "",
            autoclose: false,
            escape_set: EncodeSet::Minimal,
        }
    }
}

impl WriterOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest output: anonymous close tags.
    pub fn compress() -> Self {
        Self::default().autoclose(true)
    }

    /// One item per line, indented by two spaces per level.
    pub fn beautify() -> Self {
        Self::default().indent("  ").spacing("\n")
    }

    /// Look a preset up by name: `default`, `compress` or `beautify`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "compress" => Some(Self::compress()),
            "beautify" => Some(Self::beautify()),
            _ => None,
        }
    }

    /// Set the per-level indentation.
    pub fn indent(mut self, indent: &'static str) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set the spacing string.
    pub fn spacing(mut self, spacing: &'static str) -> Self {
        self.spacing = spacing;
        self
    }

    /// Choose between `</>` and `</name>`.
    pub fn autoclose(mut self, autoclose: bool) -> Self {
        self.autoclose = autoclose;
        self
    }

    /// Set the entity table.
    pub fn escape_set(mut self, escape_set: EncodeSet) -> Self {
        self.escape_set = escape_set;
        self
    }
}

/// A close tag that the configured policy refuses to resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// No open element matches the close tag.
    #[error("invalid closing tag `</{name}>` {}", describe_open(.open))]
    UnmatchedClose {
        /// The name in the close tag.
        name: String,
        /// The innermost open element, `None` at document level.
        open: Option<String>,
    },
}

fn describe_open(open: &Option<String>) -> String {
    match open {
        Some(open) => format!("while `<{open}>` is open"),
        None => "at document level".to_string(),
    }
}

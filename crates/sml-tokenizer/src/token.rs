//! Token types emitted by the tokenizer.

/// A terminal event of the automaton.
///
/// After emitting a token the tokenizer is back in content mode with an empty
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `<name>`
    Opened(String),
    /// `<name/>`
    SelfClosed(String),
    /// `</name>`
    Closed(String),
    /// `</>`, closes whatever is open without naming it
    Autoclosed,
    /// `&name;` (the name, without delimiters)
    NamedEntity(String),
    /// `&#hex;` (the hex digits, without delimiters)
    NumericEntity(String),
    /// `<!-- ... -->`
    CommentFinished,
    /// Malformed tag or comment opener. Holds every character consumed since
    /// leaving content, the offending one included.
    TagError(String),
    /// Malformed entity. Holds the raw characters like [`Token::TagError`].
    EscapeError(String),
}

impl Token {
    /// Whether this token reports malformed input.
    pub fn is_error(&self) -> bool {
        matches!(self, Token::TagError(_) | Token::EscapeError(_))
    }
}

/// The outcome of feeding one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Plain content; the caller appends the character to its text run.
    Text(char),
    /// The tokenizer just left content mode (`<` or `&`). Pending text must be
    /// flushed before the upcoming event.
    Begin,
    /// The character was consumed by a structural state.
    Pending,
    /// A terminal event.
    Token(Token),
}

/// What the tokenizer was doing when the input ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eof {
    /// In content mode; nothing is pending.
    Clean,
    /// Inside a comment that never saw `-->`.
    InComment,
    /// Inside a tag or entity. Holds the raw characters consumed so far.
    Incomplete(String),
}

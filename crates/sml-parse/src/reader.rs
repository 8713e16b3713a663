//! The reader: tokenizer events to tree actions.

use sml_tokenizer::{Eof, Position, Step, Token, Tokenizer, entities};
use sml_tree::{Document, TreeBuilder};
use tracing::{debug, trace};

use crate::{ReadError, ReaderConfig, SyntaxError, SyntaxErrorKind};

/// Reads SML markup into a [`Document`].
///
/// A reader only holds its configuration; every call to [`Reader::read`]
/// starts from a fresh tokenizer and tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    /// Create a reader.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The reader's configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read a string.
    pub fn read_str(&self, source: &str) -> Result<Document, ReadError> {
        self.read(source.chars())
    }

    /// Read a whole character source.
    pub fn read<I>(&self, source: I) -> Result<Document, ReadError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut state = ReadState::new(self.config);
        for c in source {
            state.feed(c)?;
        }
        state.finish()
    }
}

/// Per-call state.
struct ReadState {
    config: ReaderConfig,
    tokenizer: Tokenizer,
    builder: TreeBuilder,
    /// Pending content characters.
    text: String,
    /// Position of the next character.
    position: Position,
    /// Where the current tag, entity or comment started.
    start: Position,
}

impl ReadState {
    fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
            builder: TreeBuilder::new(config.closing),
            text: String::new(),
            position: Position::start(),
            start: Position::start(),
        }
    }

    fn feed(&mut self, c: char) -> Result<(), ReadError> {
        let at = self.position;
        self.position.advance(c);
        match self.tokenizer.feed(c) {
            Step::Text(c) => self.text.push(c),
            Step::Begin => {
                self.flush_text();
                self.start = at;
            }
            Step::Pending => {}
            Step::Token(token) => self.token(token, at)?,
        }
        Ok(())
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.builder.text(&self.text);
            self.text.clear();
        }
    }

    fn token(&mut self, token: Token, at: Position) -> Result<(), ReadError> {
        match token {
            Token::Opened(name) => {
                self.builder.open(name);
            }
            Token::SelfClosed(name) => {
                self.builder.append_empty(name);
            }
            Token::Closed(name) => self.builder.close(&name)?,
            Token::Autoclosed => self.builder.close_active(),
            Token::NamedEntity(name) => match self.config.escape_set.decode(&name) {
                Some(c) => self.builder.text(c.encode_utf8(&mut [0; 4])),
                None => self.bad_entity(SyntaxErrorKind::UnknownEntity(name), at)?,
            },
            Token::NumericEntity(hex) => match entities::decode_numeric(&hex) {
                Some(c) => self.builder.text(c.encode_utf8(&mut [0; 4])),
                None => self.bad_entity(SyntaxErrorKind::InvalidCodePoint(hex), at)?,
            },
            Token::CommentFinished => trace!("comment skipped"),
            Token::TagError(raw) => self.recover(SyntaxErrorKind::InvalidTag, raw, at)?,
            Token::EscapeError(raw) => self.recover(SyntaxErrorKind::InvalidEscape, raw, at)?,
        }
        Ok(())
    }

    fn bad_entity(&mut self, kind: SyntaxErrorKind, at: Position) -> Result<(), ReadError> {
        if self.config.strict_escape {
            return Err(self.error(kind, at).into());
        }
        debug!("dropping {} at {}", kind, at);
        Ok(())
    }

    /// Keep malformed markup as literal text, unless tags are strict.
    fn recover(&mut self, kind: SyntaxErrorKind, raw: String, at: Position) -> Result<(), ReadError> {
        if self.config.strict_tag {
            return Err(self.error(kind, at).into());
        }
        debug!("{} at {}, keeping {:?} as text", kind, at, raw);
        self.builder.text(&raw);
        Ok(())
    }

    fn finish(mut self) -> Result<Document, ReadError> {
        self.flush_text();
        let end = self.position;
        match std::mem::replace(&mut self.tokenizer, Tokenizer::new()).finish() {
            Eof::Clean => {}
            Eof::InComment if self.config.strict_comment => {
                return Err(self.error(SyntaxErrorKind::UnclosedComment, end).into());
            }
            Eof::InComment => debug!("dropping comment left open at {}", end),
            Eof::Incomplete(_) if self.config.strict_tag => {
                return Err(self.error(SyntaxErrorKind::UnexpectedEof, end).into());
            }
            Eof::Incomplete(raw) => {
                debug!("input ends inside markup, keeping {:?} as text", raw);
                self.builder.text(&raw);
            }
        }
        Ok(self.builder.finish())
    }

    fn error(&self, kind: SyntaxErrorKind, position: Position) -> SyntaxError {
        SyntaxError {
            kind,
            position,
            start: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;
    use sml_tokenizer::DecodeSet;
    use sml_tree::{ClosingPolicy, Node, StructuralError};

    fn read(source: &str) -> Document {
        Reader::default().read_str(source).unwrap()
    }

    fn read_with(source: &str, config: ReaderConfig) -> Result<Document, ReadError> {
        Reader::new(config).read_str(source)
    }

    fn doc(nodes: impl IntoIterator<Item = Node>) -> Document {
        Document::from_nodes(nodes)
    }

    fn syntax_kind(result: Result<Document, ReadError>) -> SyntaxErrorKind {
        match result {
            Err(ReadError::Syntax(err)) => err.kind,
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(read("content"), doc([Node::text("content")]));
        assert_eq!(read(""), Document::new());
    }

    #[test]
    fn test_comment_text_coalesces() {
        assert_eq!(read("con<!--comment-->tent"), doc([Node::text("content")]));
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(
            read("<tag><tag>content</tag></tag>"),
            doc([Node::element(
                "tag",
                [Node::element("tag", [Node::text("content")])]
            )])
        );
    }

    #[test]
    fn test_self_closing_and_autoclose() {
        assert_eq!(
            read("<p>a<br/>b</>c"),
            doc([
                Node::element("p", [Node::text("a"), Node::empty("br"), Node::text("b")]),
                Node::text("c"),
            ])
        );
    }

    #[test]
    fn test_entities() {
        assert_eq!(read("1&lt;2"), doc([Node::text("1<2")]));
        assert_eq!(read("&copy;&#41;&#1F600;"), doc([Node::text("©A😀")]));
        // The minimal table knows no html names.
        let minimal = ReaderConfig::default().with_escape_set(DecodeSet::Minimal);
        assert_eq!(
            syntax_kind(read_with("&copy;", minimal)),
            SyntaxErrorKind::UnknownEntity("copy".into())
        );
    }

    #[test]
    fn test_out_of_range_code_point() {
        assert_eq!(
            syntax_kind(read_with("a&#110000;b", ReaderConfig::default())),
            SyntaxErrorKind::InvalidCodePoint("110000".into())
        );
        assert_eq!(
            read_with("a&#110000;b", ReaderConfig::ignore()).unwrap(),
            doc([Node::text("ab")])
        );
    }

    #[test]
    fn test_unknown_entity_is_dropped_leniently() {
        assert_eq!(
            read_with("a&bogus;b", ReaderConfig::ignore()).unwrap(),
            doc([Node::text("ab")])
        );
    }

    #[test]
    fn test_tag_errors_recover_as_text() {
        assert_eq!(read("a < b"), doc([Node::text("a < b")]));
        assert_eq!(
            read("<a b>x</a>"),
            doc([Node::text("<a b>x")])
        );
        assert_eq!(read("fish & chips"), doc([Node::text("fish & chips")]));
        assert_eq!(read("<!x>"), doc([Node::text("<!x>")]));
    }

    #[test]
    fn test_tag_errors_raise_when_strict() {
        let strict = ReaderConfig::strict();
        assert_eq!(syntax_kind(read_with("a < b", strict)), SyntaxErrorKind::InvalidTag);
        assert_eq!(
            syntax_kind(read_with("fish & chips", strict)),
            SyntaxErrorKind::InvalidEscape
        );
    }

    #[test]
    fn test_error_position() {
        let err = read_with("ok\n  <a b>", ReaderConfig::strict()).unwrap_err();
        let err = err.as_syntax().unwrap();
        assert_eq!((err.position.row, err.position.col), (2, 5));
        assert_eq!((err.start.row, err.start.col), (2, 3));
        assert_eq!(err.to_string(), "invalid tag at 2:5");
    }

    #[test]
    fn test_unclosed_comment() {
        assert_eq!(
            syntax_kind(read_with("a<!-- b", ReaderConfig::default())),
            SyntaxErrorKind::UnclosedComment
        );
        assert_eq!(
            read_with("a<!-- b", ReaderConfig::ignore()).unwrap(),
            doc([Node::text("a")])
        );
    }

    #[test]
    fn test_input_ending_inside_markup() {
        assert_eq!(read("a<ta"), doc([Node::text("a<ta")]));
        assert_eq!(
            syntax_kind(read_with("a<ta", ReaderConfig::strict())),
            SyntaxErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_strict_closing() {
        let result = read_with("<a><b></a></b>", ReaderConfig::strict());
        assert_eq!(
            result,
            Err(ReadError::Structural(StructuralError::UnmatchedClose {
                name: "a".into(),
                open: Some("b".into()),
            }))
        );
    }

    #[test]
    fn test_ignoring_closing() {
        let config = ReaderConfig::default().with_closing(ClosingPolicy::Ignoring);
        assert_eq!(
            read_with("<a><b>x</a>y</b>z", config).unwrap(),
            doc([Node::element(
                "a",
                [Node::element("b", [Node::text("xy")]), Node::text("z")]
            )])
        );
    }

    #[test]
    fn test_forcing_closing() {
        let config = ReaderConfig::default().with_closing(ClosingPolicy::Forcing);
        assert_eq!(
            read_with("<a><b>x</a>y</b>z", config).unwrap(),
            doc([
                Node::element("a", [Node::element("b", [Node::text("x")]), Node::text("y")]),
                Node::text("z"),
            ])
        );
    }

    #[test]
    fn test_forcing_searching_closing() {
        // `</a>` closes both `b` and `a`; `</q>` matches nothing and closes `c`.
        assert_eq!(
            read("<a><b>x</a><c>y</q>z"),
            doc([
                Node::element("a", [Node::element("b", [Node::text("x")])]),
                Node::element("c", [Node::text("y")]),
                Node::text("z"),
            ])
        );
    }

    #[test]
    fn test_autoclose_pops_one_level_under_every_policy() {
        let expected = doc([
            Node::element("a", [Node::element("b", [Node::text("x")]), Node::text("y")]),
            Node::text("z"),
        ]);
        for policy in ClosingPolicy::ALL {
            let config = ReaderConfig::default().with_closing(policy);
            assert_eq!(read_with("<a><b>x</>y</>z", config).unwrap(), expected, "{policy}");
        }
        // A stray `</>` at document level closes nothing.
        for policy in ClosingPolicy::ALL {
            let config = ReaderConfig::default().with_closing(policy);
            assert_eq!(read_with("x</>y", config).unwrap(), doc([Node::text("xy")]), "{policy}");
        }
    }

    #[test]
    fn test_read_accepts_any_char_source() {
        let chars = vec!['<', 'a', '>', 'x', '<', '/', '>'];
        assert_eq!(
            Reader::default().read(chars).unwrap(),
            doc([Node::element("a", [Node::text("x")])])
        );
    }
}

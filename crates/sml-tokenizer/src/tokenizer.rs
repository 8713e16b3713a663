//! The tokenizing automaton.

use crate::{Eof, Step, Token};
use tracing::trace;

/// `a-z` or `A-Z`.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0-9`, `a-f` or `A-F`.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

const COMMENT_END: [char; 3] = ['-', '-', '>'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain text.
    Content,
    /// After `<`.
    Tag,
    /// Inside `<name`.
    OpenName,
    /// After `<name/`.
    SelfClose,
    /// After `</`.
    CloseOrAuto,
    /// Inside `</name`.
    CloseName,
    /// After `<!`.
    CommentOpen,
    /// After `<!-`.
    CommentOpenDash,
    /// Inside a comment, with the length of the `-->` prefix seen so far.
    Comment { matched: usize },
    /// After `&`.
    Escape,
    /// Inside `&name`.
    NamedEntity,
    /// Inside `&#hex`.
    NumericEntity,
}

/// A deterministic automaton fed one character at a time.
///
/// Content characters are handed back to the caller as [`Step::Text`]; the
/// tokenizer only buffers tag names, entity names and hex digits. Once a
/// [`Token`] is returned the automaton starts over from content mode.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    state: State,
    /// Name or hex digits captured for the pending token.
    buffer: String,
    /// Everything consumed since leaving content, for error recovery.
    raw: String,
}

impl Tokenizer {
    /// Create a tokenizer in content mode.
    pub fn new() -> Self {
        Self {
            state: State::Content,
            buffer: String::new(),
            raw: String::new(),
        }
    }

    /// Whether the tokenizer is in content mode.
    #[inline]
    pub fn is_content(&self) -> bool {
        self.state == State::Content
    }

    /// Whether the tokenizer is skipping a comment.
    #[inline]
    pub fn is_in_comment(&self) -> bool {
        matches!(self.state, State::Comment { .. })
    }

    /// Consume one character.
    pub fn feed(&mut self, c: char) -> Step {
        match self.state {
            State::Content => match c {
                '<' => self.begin(State::Tag, c),
                '&' => self.begin(State::Escape, c),
                _ => Step::Text(c),
            },
            State::Comment { matched } => self.feed_comment(matched, c),
            state => {
                self.raw.push(c);
                self.feed_structural(state, c)
            }
        }
    }

    /// Report what was pending when the input ended.
    pub fn finish(self) -> Eof {
        match self.state {
            State::Content => Eof::Clean,
            State::Comment { .. } => Eof::InComment,
            _ => Eof::Incomplete(self.raw),
        }
    }

    fn feed_structural(&mut self, state: State, c: char) -> Step {
        match state {
            State::Tag => match c {
                '/' => self.goto(State::CloseOrAuto),
                '!' => self.goto(State::CommentOpen),
                c if is_letter(c) => self.capture(State::OpenName, c),
                _ => self.tag_error(),
            },
            State::OpenName => match c {
                '/' => self.goto(State::SelfClose),
                '>' => self.emit_buffer(Token::Opened),
                c if is_letter(c) => self.capture(State::OpenName, c),
                _ => self.tag_error(),
            },
            State::SelfClose => match c {
                '>' => self.emit_buffer(Token::SelfClosed),
                _ => self.tag_error(),
            },
            State::CloseOrAuto => match c {
                '>' => self.emit(Token::Autoclosed),
                c if is_letter(c) => self.capture(State::CloseName, c),
                _ => self.tag_error(),
            },
            State::CloseName => match c {
                '>' => self.emit_buffer(Token::Closed),
                c if is_letter(c) => self.capture(State::CloseName, c),
                _ => self.tag_error(),
            },
            State::CommentOpen => match c {
                '-' => self.goto(State::CommentOpenDash),
                _ => self.tag_error(),
            },
            State::CommentOpenDash => match c {
                '-' => {
                    self.raw.clear();
                    self.goto(State::Comment { matched: 0 })
                }
                _ => self.tag_error(),
            },
            State::Escape => match c {
                '#' => self.goto(State::NumericEntity),
                c if is_letter(c) => self.capture(State::NamedEntity, c),
                _ => self.escape_error(),
            },
            State::NamedEntity => match c {
                ';' => self.emit_buffer(Token::NamedEntity),
                c if is_letter(c) => self.capture(State::NamedEntity, c),
                _ => self.escape_error(),
            },
            State::NumericEntity => match c {
                ';' => self.emit_buffer(Token::NumericEntity),
                c if is_hex_digit(c) => self.capture(State::NumericEntity, c),
                _ => self.escape_error(),
            },
            State::Content | State::Comment { .. } => {
                unreachable!("content and comment states are handled by feed")
            }
        }
    }

    fn feed_comment(&mut self, matched: usize, c: char) -> Step {
        if c != COMMENT_END[matched] {
            // A broken partial match gets no credit, even for a `-`.
            self.state = State::Comment { matched: 0 };
            return Step::Pending;
        }
        if matched + 1 == COMMENT_END.len() {
            return self.emit(Token::CommentFinished);
        }
        self.state = State::Comment {
            matched: matched + 1,
        };
        Step::Pending
    }

    fn begin(&mut self, state: State, c: char) -> Step {
        self.raw.push(c);
        self.state = state;
        Step::Begin
    }

    fn goto(&mut self, state: State) -> Step {
        self.state = state;
        Step::Pending
    }

    fn capture(&mut self, state: State, c: char) -> Step {
        self.buffer.push(c);
        self.state = state;
        Step::Pending
    }

    fn emit_buffer(&mut self, make: fn(String) -> Token) -> Step {
        let buffer = std::mem::take(&mut self.buffer);
        self.emit(make(buffer))
    }

    fn tag_error(&mut self) -> Step {
        let raw = std::mem::take(&mut self.raw);
        self.emit(Token::TagError(raw))
    }

    fn escape_error(&mut self) -> Step {
        let raw = std::mem::take(&mut self.raw);
        self.emit(Token::EscapeError(raw))
    }

    fn emit(&mut self, token: Token) -> Step {
        trace!("Token {:?}", token);
        *self = Tokenizer::new();
        Step::Token(token)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

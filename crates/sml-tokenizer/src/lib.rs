//! A character-at-a-time tokenizer for SML, plus the entity tables shared by
//! the reader and the writer.

mod position;
pub use position::Position;

mod token;
pub use token::{Eof, Step, Token};

mod tokenizer;
pub use tokenizer::{Tokenizer, is_hex_digit, is_letter};

pub mod entities;
pub use entities::{DecodeSet, EncodeSet, UnknownSet};

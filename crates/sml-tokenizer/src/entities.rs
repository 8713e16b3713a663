//! Entity tables.
//!
//! Decoding and encoding use separate tables: the reader maps entity names to
//! characters through a [`DecodeSet`], the writer maps characters to entity
//! names through an [`EncodeSet`]. Names are letters only, since that is all
//! the tokenizer accepts inside `&...;`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The five XML entities.
const MINIMAL_DECODE: &[(&str, char)] = &[
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("quot", '"'),
    ("apos", '\''),
];

/// Named HTML entities understood on top of [`MINIMAL_DECODE`].
const HTML_EXTRA: &[(&str, char)] = &[
    ("nbsp", '\u{a0}'),
    ("iexcl", '¡'),
    ("cent", '¢'),
    ("pound", '£'),
    ("curren", '¤'),
    ("yen", '¥'),
    ("brvbar", '¦'),
    ("sect", '§'),
    ("uml", '¨'),
    ("copy", '©'),
    ("ordf", 'ª'),
    ("laquo", '«'),
    ("not", '¬'),
    ("shy", '\u{ad}'),
    ("reg", '®'),
    ("macr", '¯'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("acute", '´'),
    ("micro", 'µ'),
    ("para", '¶'),
    ("middot", '·'),
    ("cedil", '¸'),
    ("ordm", 'º'),
    ("raquo", '»'),
    ("iquest", '¿'),
    ("Agrave", 'À'),
    ("Aacute", 'Á'),
    ("Acirc", 'Â'),
    ("Auml", 'Ä'),
    ("Aring", 'Å'),
    ("AElig", 'Æ'),
    ("Ccedil", 'Ç'),
    ("Egrave", 'È'),
    ("Eacute", 'É'),
    ("Ntilde", 'Ñ'),
    ("Ouml", 'Ö'),
    ("times", '×'),
    ("Oslash", 'Ø'),
    ("Uuml", 'Ü'),
    ("szlig", 'ß'),
    ("agrave", 'à'),
    ("aacute", 'á'),
    ("acirc", 'â'),
    ("auml", 'ä'),
    ("aring", 'å'),
    ("aelig", 'æ'),
    ("ccedil", 'ç'),
    ("egrave", 'è'),
    ("eacute", 'é'),
    ("ecirc", 'ê'),
    ("ntilde", 'ñ'),
    ("ouml", 'ö'),
    ("divide", '÷'),
    ("oslash", 'ø'),
    ("uuml", 'ü'),
    ("Delta", 'Δ'),
    ("Pi", 'Π'),
    ("Sigma", 'Σ'),
    ("Omega", 'Ω'),
    ("alpha", 'α'),
    ("beta", 'β'),
    ("gamma", 'γ'),
    ("delta", 'δ'),
    ("lambda", 'λ'),
    ("mu", 'μ'),
    ("pi", 'π'),
    ("sigma", 'σ'),
    ("omega", 'ω'),
    ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'),
    ("thinsp", '\u{2009}'),
    ("zwnj", '\u{200c}'),
    ("zwj", '\u{200d}'),
    ("lrm", '\u{200e}'),
    ("rlm", '\u{200f}'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("sbquo", '‚'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("bdquo", '„'),
    ("dagger", '†'),
    ("Dagger", '‡'),
    ("bull", '•'),
    ("hellip", '…'),
    ("permil", '‰'),
    ("prime", '′'),
    ("Prime", '″'),
    ("lsaquo", '‹'),
    ("rsaquo", '›'),
    ("euro", '€'),
    ("trade", '™'),
    ("larr", '←'),
    ("uarr", '↑'),
    ("rarr", '→'),
    ("darr", '↓'),
    ("harr", '↔'),
    ("minus", '−'),
    ("infin", '∞'),
    ("ne", '≠'),
    ("le", '≤'),
    ("ge", '≥'),
    ("asymp", '≈'),
    ("loz", '◊'),
    ("spades", '♠'),
    ("clubs", '♣'),
    ("hearts", '♥'),
    ("diams", '♦'),
];

/// Characters the minimal writer table always escapes.
const MINIMAL_ENCODE: &[(char, &str)] = &[('&', "amp"), ('<', "lt"), ('>', "gt")];

/// Quotes, escaped by the html writer table only.
const QUOTES_ENCODE: &[(char, &str)] = &[('"', "quot"), ('\'', "apos")];

/// An unknown entity set name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity set `{0}` (expected `minimal` or `html`)")]
pub struct UnknownSet(pub String);

/// Name -> character tables used when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodeSet {
    /// `lt`, `gt`, `amp`, `quot` and `apos`.
    Minimal,
    /// The minimal set plus common HTML named entities.
    #[default]
    Html,
}

impl DecodeSet {
    /// Look up an entity name.
    pub fn decode(self, name: &str) -> Option<char> {
        let lookup = |table: &[(&str, char)]| {
            table
                .iter()
                .find(|(entity, _)| *entity == name)
                .map(|&(_, c)| c)
        };
        match self {
            DecodeSet::Minimal => lookup(MINIMAL_DECODE),
            DecodeSet::Html => lookup(MINIMAL_DECODE).or_else(|| lookup(HTML_EXTRA)),
        }
    }

    /// The set's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            DecodeSet::Minimal => "minimal",
            DecodeSet::Html => "html",
        }
    }
}

/// Character -> name tables used when writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EncodeSet {
    /// `&`, `<` and `>`.
    #[default]
    Minimal,
    /// The minimal set, both quotes, and every non-ASCII character with an
    /// HTML name.
    Html,
}

impl EncodeSet {
    /// The entity name for `c`, if this table escapes it.
    pub fn encode(self, c: char) -> Option<&'static str> {
        let lookup = |table: &[(char, &'static str)]| {
            table
                .iter()
                .find(|(escaped, _)| *escaped == c)
                .map(|&(_, name)| name)
        };
        match self {
            EncodeSet::Minimal => lookup(MINIMAL_ENCODE),
            EncodeSet::Html => lookup(MINIMAL_ENCODE)
                .or_else(|| lookup(QUOTES_ENCODE))
                .or_else(|| {
                    HTML_EXTRA
                        .iter()
                        .find(|(_, escaped)| *escaped == c)
                        .map(|&(name, _)| name)
                }),
        }
    }

    /// The set's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            EncodeSet::Minimal => "minimal",
            EncodeSet::Html => "html",
        }
    }
}

macro_rules! impl_set_names {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = UnknownSet;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "minimal" => Ok($ty::Minimal),
                    "html" => Ok($ty::Html),
                    other => Err(UnknownSet(other.to_string())),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

impl_set_names!(DecodeSet);
impl_set_names!(EncodeSet);

/// Decode the hex digits of a numeric entity.
///
/// Returns `None` for an empty buffer, anything above U+10FFFF, and
/// surrogates.
pub fn decode_numeric(hex: &str) -> Option<char> {
    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code)
}

/// Whether `c` is written as a numeric entity whatever the table says:
/// C0 controls and DEL.
#[inline]
pub fn needs_numeric_escape(c: char) -> bool {
    c <= '\u{1f}' || c == '\u{7f}'
}

/// Escape text for output.
///
/// Characters in `set` become `&name;`, control characters become `&#hex;`.
pub fn escape(set: EncodeSet, s: &str) -> Cow<'_, str> {
    if !s
        .chars()
        .any(|c| needs_numeric_escape(c) || set.encode(c).is_some())
    {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if let Some(name) = set.encode(c) {
            result.push('&');
            result.push_str(name);
            result.push(';');
        } else if needs_numeric_escape(c) {
            result.push_str(&format!("&#{:x};", c as u32));
        } else {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

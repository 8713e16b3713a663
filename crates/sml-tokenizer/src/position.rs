//! Source locations.

/// A location in the character source.
///
/// Rows and columns are 1-based; `offset` counts characters (not bytes) from
/// the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
pub struct Position {
    /// Character offset from the start of the source.
    pub offset: u32,
    /// 1-based line number.
    pub row: u32,
    /// 1-based column number.
    pub col: u32,
}

impl Position {
    /// The position of the first character.
    #[inline]
    pub fn start() -> Self {
        Self {
            offset: 0,
            row: 1,
            col: 1,
        }
    }

    /// Move past `c`.
    #[inline]
    pub fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

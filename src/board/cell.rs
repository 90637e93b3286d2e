//! Board Cells
//!
//! Single-character cell classification.

use std::fmt;

const BLANK: char = '*';
const UNKNOWN: char = '?';

/// One square of a skyscraper board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Building height or hint value. Boards only ever hold 1 through 9;
    /// other values are never produced by [`Cell::from_char`].
    Digit(u8),
    /// `'*'`: no hint at this border position
    Blank,
    /// `'?'`: unresolved cell
    Unknown,
}

impl Cell {
    /// Classify a board character, `None` for anything outside the alphabet
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => Some(Cell::Digit(ch as u8 - b'0')),
            BLANK => Some(Cell::Blank),
            UNKNOWN => Some(Cell::Unknown),
            _ => None,
        }
    }

    /// Board character for this cell. Digits above 9 map past `'9'` in
    /// code point order instead of wrapping.
    pub fn as_char(self) -> char {
        match self {
            Cell::Digit(_) => char::from_u32(self.rank()).unwrap_or(UNKNOWN),
            Cell::Blank => BLANK,
            Cell::Unknown => UNKNOWN,
        }
    }

    /// The hint value if this cell carries one
    pub fn digit(self) -> Option<u8> {
        match self {
            Cell::Digit(d) => Some(d),
            _ => None,
        }
    }

    /// Rank used when comparing heights along a line.
    ///
    /// Follows character order, so `'*'` ranks below every digit and `'?'`
    /// above every digit.
    pub fn rank(self) -> u32 {
        match self {
            Cell::Digit(d) => u32::from(b'0') + u32::from(d),
            Cell::Blank => u32::from(BLANK),
            Cell::Unknown => u32::from(UNKNOWN),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//! Error types for board loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Board failed shape or alphabet checks at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board must be at least 3x3, got {side}x{side}")]
    TooSmall { side: usize },

    #[error("board is not square: {rows} rows but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    #[error("'*' is only allowed on the border, found at row {row}, column {col}")]
    BlankInInterior { row: usize, col: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed board: {0}")]
    Malformed(#[from] MalformedBoardError),
}

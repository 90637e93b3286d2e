//! Board Grid
//!
//! Square grid of cells with hint borders. Shape is checked once, at
//! construction, so the checkers can index freely.

use std::fmt;
use std::str::FromStr;

use crate::board::cell::Cell;
use crate::error::MalformedBoardError;

/// Smallest side that leaves at least one interior cell
pub const MIN_SIDE: usize = 3;

/// A square skyscraper board, hints included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from text rows, one string per row.
    ///
    /// Rejects empty input, rows of unequal length, non-square shapes,
    /// boards smaller than 3x3, characters outside `1-9`, `*`, `?`, and
    /// `*` placed in an interior cell.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, MalformedBoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        if rows.is_empty() {
            return Err(MalformedBoardError::Empty);
        }

        let side = rows.len();
        if let Some((row, chars)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(MalformedBoardError::NotSquare {
                rows: side,
                row,
                len: chars.len(),
            });
        }

        if side < MIN_SIDE {
            return Err(MalformedBoardError::TooSmall { side });
        }

        let mut cells = Vec::with_capacity(side);
        for (row, chars) in rows.iter().enumerate() {
            let mut line = Vec::with_capacity(side);
            for (col, &ch) in chars.iter().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(MalformedBoardError::InvalidCell { row, col, ch })?;
                if cell == Cell::Blank && is_interior(side, row) && is_interior(side, col) {
                    return Err(MalformedBoardError::BlankInInterior { row, col });
                }
                line.push(cell);
            }
            cells.push(line);
        }

        Ok(Self { cells })
    }

    /// Number of rows, equal to the number of columns
    pub fn side(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// All rows, hint borders included
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Rows strictly between the top and bottom hint borders, with their
    /// row index
    pub fn interior_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        let last = self.side() - 1;
        self.rows().enumerate().take(last).skip(1)
    }

    /// Column-major copy: row `i` of the result is column `i` of `self`
    pub fn transpose(&self) -> Board {
        let side = self.side();
        let cells = (0..side)
            .map(|col| self.cells.iter().map(|row| row[col]).collect())
            .collect();
        Board { cells }
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }
}

fn is_interior(side: usize, index: usize) -> bool {
    index > 0 && index + 1 < side
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    /// Parse newline-separated rows, trimming each and skipping blank lines
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_rows(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

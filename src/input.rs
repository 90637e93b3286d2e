//! Board input from line-oriented text sources.
//!
//! One board row per line. Surrounding whitespace is stripped and blank
//! lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::board::Board;
use crate::error::Result;

/// Reads board rows from any buffered reader
pub fn read_board_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }
        trace!("read row {:?}", row);
        rows.push(row.to_string());
    }

    Ok(rows)
}

/// Reads board rows from a file
///
/// # Errors
/// Returns error if the file cannot be opened or read
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows = read_board_from_reader(BufReader::new(file))?;
    debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Reads and parses a board file
///
/// # Errors
/// Returns error if the file cannot be read or the rows do not form a
/// well-shaped board
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let rows = read_board(path)?;
    Ok(Board::from_rows(rows)?)
}

//! Row Rules
//!
//! Completeness, row uniqueness and horizontal hint compliance. Each rule
//! reads only the rows of the board it is given, so the column rules reuse
//! them on a transposed board.

use std::collections::HashSet;

use log::debug;

use crate::board::{Board, Cell};
use crate::validation::visibility::left_to_right_check;

/// False if any cell on the board is still `'?'`
pub fn check_not_finished_board(board: &Board) -> bool {
    let finished = board.cells().all(|cell| cell != Cell::Unknown);
    if !finished {
        debug!("board has unresolved cells");
    }
    finished
}

/// Every interior row holds distinct values in its interior cells
pub fn check_uniqueness_in_rows(board: &Board) -> bool {
    let last = board.side() - 1;
    let mut seen = HashSet::with_capacity(last);

    for (index, row) in board.interior_rows() {
        seen.clear();
        for &cell in &row[1..last] {
            if !seen.insert(cell) {
                debug!("row {} repeats {}", index, cell);
                return false;
            }
        }
    }

    true
}

/// Every interior row agrees with its left hint and, read backwards, with
/// its right hint. `'*'` hints are skipped.
pub fn check_horizontal_visibility(board: &Board) -> bool {
    let last = board.side() - 1;

    for (index, row) in board.interior_rows() {
        if let Some(hint) = row[0].digit() {
            if !left_to_right_check(row, hint) {
                debug!("row {} fails left hint {}", index, hint);
                return false;
            }
        }

        if let Some(hint) = row[last].digit() {
            let reversed: Vec<Cell> = row.iter().rev().copied().collect();
            if !left_to_right_check(&reversed, hint) {
                debug!("row {} fails right hint {}", index, hint);
                return false;
            }
        }
    }

    true
}

//! Column Rules
//!
//! Columns are checked as the rows of the transposed board.

use log::debug;

use crate::board::Board;
use crate::validation::rows::{check_horizontal_visibility, check_uniqueness_in_rows};

/// Every interior column holds distinct heights and agrees with its top and
/// bottom hints
pub fn check_columns(board: &Board) -> bool {
    let columns = board.transpose();

    if !check_uniqueness_in_rows(&columns) {
        debug!("column uniqueness failed");
        return false;
    }
    if !check_horizontal_visibility(&columns) {
        debug!("column visibility failed");
        return false;
    }

    true
}

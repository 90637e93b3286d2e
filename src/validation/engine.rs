//! Validation Engine
//!
//! Runs every board rule and reduces them to a single verdict.

use log::debug;

use crate::board::Board;
use crate::error::MalformedBoardError;
use crate::validation::columns::check_columns;
use crate::validation::rows::{
    check_horizontal_visibility, check_not_finished_board, check_uniqueness_in_rows,
};

/// A named board rule
type Rule = (&'static str, fn(&Board) -> bool);

const RULES: [Rule; 4] = [
    ("completeness", check_not_finished_board),
    ("row uniqueness", check_uniqueness_in_rows),
    ("row visibility", check_horizontal_visibility),
    ("columns", check_columns),
];

/// Validate a board against every skyscraper rule.
///
/// Stops at the first rule that fails.
pub fn validate(board: &Board) -> bool {
    for (name, rule) in RULES {
        if !rule(board) {
            debug!("board rejected by {} rule", name);
            return false;
        }
    }

    debug!("board accepted");
    true
}

/// Parse text rows into a board and validate it
pub fn validate_rows<I, S>(rows: I) -> Result<bool, MalformedBoardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let board = Board::from_rows(rows)?;
    Ok(validate(&board))
}

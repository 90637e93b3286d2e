//! Line Visibility
//!
//! Counts buildings visible from the leading end of a line.

use crate::board::Cell;

/// Check that the number of buildings visible from the left of `line`
/// equals `pivot`.
///
/// `line` is a full board row: leading hint, interior heights, trailing
/// hint. The first interior cell is always visible; every later interior
/// cell taller than all before it adds one. The trailing cell is never
/// counted. Lines shorter than three cells have no interior and never match.
pub fn left_to_right_check(line: &[Cell], pivot: u8) -> bool {
    if line.len() < 3 {
        return false;
    }

    let interior = &line[1..line.len() - 1];
    let mut tallest = interior[0].rank();
    let mut visible: u32 = 1;

    for cell in &interior[1..] {
        if cell.rank() > tallest {
            tallest = cell.rank();
            visible += 1;
        }
    }

    visible == u32::from(pivot)
}

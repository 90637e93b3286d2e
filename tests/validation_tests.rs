use skyscraper_validator::validation::{
    check_columns, check_horizontal_visibility, check_not_finished_board,
    check_uniqueness_in_rows, left_to_right_check,
};
use skyscraper_validator::{validate, validate_rows, Board, Cell, MalformedBoardError};

const SOLVED: [&str; 7] = [
    "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
];

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).expect("valid board")
}

fn line(text: &str) -> Vec<Cell> {
    text.chars()
        .map(|ch| Cell::from_char(ch).expect("board character"))
        .collect()
}

#[test]
fn test_solved_board_is_valid() {
    assert!(validate(&board(&SOLVED)));
}

#[test]
fn test_broken_row_is_invalid() {
    let mut rows = SOLVED;
    rows[1] = "452453*";
    assert!(!validate(&board(&rows)));
    assert_eq!(validate_rows(rows), Ok(false));
}

#[test]
fn test_visibility_reference_lines() {
    assert!(left_to_right_check(&line("412453*"), 4));
    assert!(!left_to_right_check(&line("452453*"), 5));
}

#[test]
fn test_any_unknown_cell_flips_completeness() {
    let solved = board(&SOLVED);
    assert!(check_not_finished_board(&solved));

    for row in 0..SOLVED.len() {
        for col in 0..SOLVED.len() {
            let mut rows: Vec<String> = SOLVED.iter().map(|r| r.to_string()).collect();
            rows[row].replace_range(col..col + 1, "?");
            let board = Board::from_rows(&rows).expect("valid board");
            assert!(!check_not_finished_board(&board), "'?' at ({row}, {col})");
            assert!(!validate(&board));
        }
    }
}

#[test]
fn test_uniqueness_only_looks_at_interior() {
    // Hints duplicate interior values; interiors are distinct.
    let rows = ["*1221", "11232", "22313", "33121", "*****"];
    assert!(check_uniqueness_in_rows(&board(&rows)));

    let rows = ["*****", "*123*", "*232*", "*311*", "*****"];
    assert!(!check_uniqueness_in_rows(&board(&rows)));
}

#[test]
fn test_columns_match_row_rules_on_transpose() {
    let mut broken = SOLVED;
    broken[2] = "423154*";

    for rows in [SOLVED, broken] {
        let board = board(&rows);
        let transposed = board.transpose();
        assert_eq!(
            check_columns(&board),
            check_uniqueness_in_rows(&transposed) && check_horizontal_visibility(&transposed)
        );
        assert_eq!(transposed.transpose(), board);
    }
}

#[test]
fn test_column_violation_alone_fails_validation() {
    // Rows stay unique and row hints hold, but column 4's top hint is wrong.
    let mut rows = SOLVED;
    rows[0] = "***23**";
    let board = board(&rows);
    assert!(check_uniqueness_in_rows(&board));
    assert!(check_horizontal_visibility(&board));
    assert!(!check_columns(&board));
    assert!(!validate(&board));
}

#[test]
fn test_validate_is_idempotent() {
    let mut broken = SOLVED;
    broken[1] = "452453*";
    for rows in [SOLVED, broken] {
        let board = board(&rows);
        let first = validate(&board);
        let second = validate(&board);
        assert_eq!(first, second);
    }
}

#[test]
fn test_smallest_board() {
    assert_eq!(validate_rows(["*1*", "111", "*1*"]), Ok(true));
    assert_eq!(validate_rows(["*2*", "*1*", "***"]), Ok(false));
}

#[test]
fn test_malformed_boards_fail_fast() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(validate_rows(empty), Err(MalformedBoardError::Empty));
    assert_eq!(
        validate_rows(["***21**", "412453*"]),
        Err(MalformedBoardError::NotSquare {
            rows: 2,
            row: 0,
            len: 7
        })
    );
    assert_eq!(
        validate_rows(["*"]),
        Err(MalformedBoardError::TooSmall { side: 1 })
    );
    assert!(matches!(
        validate_rows(["***", "*x*", "***"]),
        Err(MalformedBoardError::InvalidCell { ch: 'x', .. })
    ));
}

//! Board Validation
//!
//! Skyscraper rules as independent predicates over a [`Board`], plus the
//! engine that combines them.
//!
//! [`Board`]: crate::board::Board

pub mod columns;
pub mod engine;
pub mod rows;
pub mod visibility;

pub use columns::check_columns;
pub use engine::{validate, validate_rows};
pub use rows::{check_horizontal_visibility, check_not_finished_board, check_uniqueness_in_rows};
pub use visibility::left_to_right_check;

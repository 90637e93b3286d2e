//! Skyscraper Board
//!
//! Typed representation of a puzzle board: hint borders around an interior
//! of building heights. No validation rules live here beyond shape.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{Board, MIN_SIDE};

//! Skyscraper Board Validator
//!
//! Checks a solved skyscraper puzzle board against the puzzle's rules.
//!
//! This library provides:
//! - A typed board model with shape checks at construction
//! - Row, column, and hint visibility rules
//! - Board input from line-oriented text
//! - Configuration for the `skyscraper-check` binary

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod validation;

// Re-exports for clean public API
pub use board::{Board, Cell};
pub use config::Config;
pub use error::{Error, MalformedBoardError, Result};
pub use input::{load_board, read_board, read_board_from_reader};
pub use validation::{validate, validate_rows};

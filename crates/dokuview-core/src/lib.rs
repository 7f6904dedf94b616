//! Core grid-model types for dokuview.
//!
//! This crate provides the vocabulary shared by the dataset store, the game
//! session, and the UI shell:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`Position`]: a board coordinate with a row-major linear index
//! - [`DigitGrid`]: a 9x9 grid of optional digits, convertible to and from
//!   the dataset's 81-character digit-string form
//!
//! Blank cells are `None`; the digit type itself can never hold an invalid
//! value.
//!
//! # Examples
//!
//! ```
//! use dokuview_core::{Digit, DigitGrid, Position};
//!
//! let mut s = String::from("5");
//! s.push_str(&"0".repeat(80));
//! let grid: DigitGrid = s.parse().unwrap();
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert_eq!(grid[Position::new(1, 0)], None);
//! assert_eq!(grid.to_string(), s);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{CELL_COUNT, DigitGrid, ParseGridError},
    position::Position,
};

//! The 9x9 digit grid and its 81-character string form.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 81;

/// A 9x9 grid of optional digits in row-major order.
///
/// Parsing and formatting use the dataset's 81-character form: one ASCII
/// digit per cell, `'0'` marking a blank. The two conversions round-trip
/// exactly.
///
/// # Examples
///
/// ```
/// use dokuview_core::{Digit, DigitGrid, Position};
///
/// let s = "0".repeat(81);
/// let mut grid: DigitGrid = s.parse().unwrap();
/// assert_eq!(grid.blank_count(), 81);
///
/// grid[Position::new(2, 0)] = Some(Digit::D4);
/// assert!(grid.to_string().starts_with("004"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; CELL_COUNT],
}

impl DigitGrid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Iterates over all cells with their positions, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self[pos]))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Error returned when an 81-character grid string fails to parse.
///
/// A malformed string is rejected outright; it is never truncated or
/// padded to fit the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 characters.
    #[display("grid string must be 81 characters, got {len}")]
    InvalidLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The string contains a character outside `'0'`-`'9'`.
    #[display("invalid character {ch:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its linear position in the input.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELL_COUNT {
            return Err(ParseGridError::InvalidLength { len });
        }

        let mut cells = [None; CELL_COUNT];
        for (index, ch) in s.chars().enumerate() {
            cells[index] = match ch {
                '0' => None,
                '1'..='9' => Digit::from_ascii(ch),
                _ => return Err(ParseGridError::InvalidCharacter { ch, index }),
            };
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => f.write_str(digit.as_str())?,
                None => f.write_str("0")?,
            }
        }
        Ok(())
    }
}

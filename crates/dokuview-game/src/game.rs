//! The active puzzle session.

use dokuview_core::{CELL_COUNT, Digit, DigitGrid, ParseGridError, Position};

use crate::{CellState, CellVerdict, CheckReport};

/// Errors produced by entry mutation on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is pre-filled by the quiz grid.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The solution has been revealed; entries are frozen until a new
    /// puzzle is installed.
    #[display("solution already revealed")]
    SolutionRevealed,
}

/// One active puzzle session.
///
/// Owns the quiz grid, the solution grid, and the player's entries for
/// editable cells. Entered values are never compared against the solution
/// at entry time; [`Game::check`] does that on demand. The session is
/// replaced wholesale when a new puzzle loads — there is no carryover of
/// entries.
///
/// The solution grid is trusted to be complete and valid; the dataset
/// store shape-checks it before a session exists, and nothing here
/// verifies it against sudoku rules.
///
/// # Example
///
/// ```
/// use dokuview_core::{Digit, Position};
/// use dokuview_game::{CellState, Game};
///
/// let mut quiz = String::from("5");
/// quiz.push_str(&"0".repeat(80));
/// let solution =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
/// let mut game = Game::from_strings(&quiz, solution).unwrap();
///
/// assert_eq!(game.cell(Position::new(0, 0)), CellState::Given(Digit::D5));
/// game.set_digit(Position::new(1, 0), Digit::D3).unwrap();
/// assert_eq!(game.cell(Position::new(1, 0)), CellState::Filled(Digit::D3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    given: DigitGrid,
    solution: DigitGrid,
    entries: [Option<Digit>; CELL_COUNT],
    revealed: bool,
}

impl Game {
    /// Creates a session from already-parsed grids. Every cell with a
    /// digit in `given` is fixed; the rest start empty.
    #[must_use]
    pub fn new(given: DigitGrid, solution: DigitGrid) -> Self {
        Self {
            given,
            solution,
            entries: [None; CELL_COUNT],
            revealed: false,
        }
    }

    /// Parses a quiz/solution string pair and creates a session from it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if either string is not exactly 81 digit
    /// characters.
    pub fn from_strings(quiz: &str, solution: &str) -> Result<Self, ParseGridError> {
        Ok(Self::new(quiz.parse()?, solution.parse()?))
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        if let Some(digit) = self.given[pos] {
            return CellState::Given(digit);
        }
        if self.revealed {
            return self.solution[pos].map_or(CellState::Empty, CellState::Revealed);
        }
        match self.entries[pos.index()] {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        }
    }

    /// Records `digit` as the entry for the editable cell at `pos`,
    /// replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for quiz-given cells
    /// and [`GameError::SolutionRevealed`] once the solution is on
    /// display.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        *self.entry_slot(pos)? = Some(digit);
        Ok(())
    }

    /// Clears the entry in the editable cell at `pos`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Game::set_digit`].
    pub fn clear_digit(&mut self, pos: Position) -> Result<(), GameError> {
        *self.entry_slot(pos)? = None;
        Ok(())
    }

    fn entry_slot(&mut self, pos: Position) -> Result<&mut Option<Digit>, GameError> {
        if self.given[pos].is_some() {
            return Err(GameError::CannotModifyGivenCell);
        }
        if self.revealed {
            return Err(GameError::SolutionRevealed);
        }
        Ok(&mut self.entries[pos.index()])
    }

    /// Compares every editable cell's entry against the solution.
    ///
    /// A blank entry is incorrect, the same as a wrong digit. The session
    /// itself is not mutated; the caller applies the per-cell verdicts to
    /// its presentation state.
    #[must_use]
    pub fn check(&self) -> CheckReport {
        let mut verdicts = [CellVerdict::Given; CELL_COUNT];
        for pos in Position::ALL {
            if self.given[pos].is_some() {
                continue;
            }
            let entry = self.entries[pos.index()];
            verdicts[pos.index()] = if entry.is_some() && entry == self.solution[pos] {
                CellVerdict::Correct
            } else {
                CellVerdict::Incorrect
            };
        }
        CheckReport::new(verdicts)
    }

    /// Shows the solution in every editable cell and freezes entries.
    ///
    /// One-way: only installing a new session restores editability.
    pub fn reveal_solution(&mut self) {
        self.revealed = true;
    }

    /// Whether the solution has been revealed for this session.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the quiz grid backing this session.
    #[must_use]
    pub fn given(&self) -> &DigitGrid {
        &self.given
    }

    /// Returns the solution grid backing this session.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }
}

//! Per-cell display state.

use dokuview_core::Digit;

/// The state of one board cell, derived from the session state.
///
/// Which variant a cell is in follows entirely from the quiz grid, the
/// player's entries, and whether the solution has been revealed; nothing
/// is stored per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Pre-filled by the quiz grid; never editable.
    Given(Digit),
    /// Editable cell holding a player-entered digit.
    Filled(Digit),
    /// Editable cell with no entry.
    Empty,
    /// Editable cell showing the solution after a reveal; frozen until a
    /// new puzzle is installed.
    Revealed(Digit),
}

impl CellState {
    /// Returns the digit shown in the cell, if any.
    #[must_use]
    pub fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) | Self::Revealed(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Whether the cell comes from the quiz grid.
    #[must_use]
    pub fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Whether the cell currently accepts input.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Filled(_) | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D5).as_digit(), Some(Digit::D5));
        assert_eq!(CellState::Filled(Digit::D1).as_digit(), Some(Digit::D1));
        assert_eq!(CellState::Revealed(Digit::D9).as_digit(), Some(Digit::D9));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_editability() {
        assert!(!CellState::Given(Digit::D5).is_editable());
        assert!(!CellState::Revealed(Digit::D5).is_editable());
        assert!(CellState::Filled(Digit::D5).is_editable());
        assert!(CellState::Empty.is_editable());

        assert!(CellState::Given(Digit::D5).is_given());
        assert!(!CellState::Revealed(Digit::D5).is_given());
    }
}

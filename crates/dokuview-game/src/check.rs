//! Check results.

use dokuview_core::{CELL_COUNT, Position};

/// Verdict for a single cell after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVerdict {
    /// Quiz-given cell; not assessed against user input.
    Given,
    /// The entry matches the solution digit.
    Correct,
    /// A wrong digit, or no entry at all — an unattempted cell is never
    /// skipped.
    Incorrect,
}

/// Result of checking every editable cell against the solution.
///
/// Produced by [`Game::check`](crate::Game::check); the caller uses the
/// per-cell verdicts to update each cell's presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    verdicts: [CellVerdict; CELL_COUNT],
}

impl CheckReport {
    pub(crate) fn new(verdicts: [CellVerdict; CELL_COUNT]) -> Self {
        Self { verdicts }
    }

    /// Returns the verdict for the cell at `pos`.
    #[must_use]
    pub fn verdict(&self, pos: Position) -> CellVerdict {
        self.verdicts[pos.index()]
    }

    /// Returns `true` iff every editable cell is correct.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.incorrect_count() == 0
    }

    /// Returns the number of editable cells that are not correct.
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|verdict| **verdict == CellVerdict::Incorrect)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation() {
        let mut verdicts = [CellVerdict::Correct; CELL_COUNT];
        verdicts[0] = CellVerdict::Given;
        let report = CheckReport::new(verdicts);
        assert!(report.all_correct());
        assert_eq!(report.incorrect_count(), 0);
        assert_eq!(report.verdict(Position::from_index(0)), CellVerdict::Given);

        // A single incorrect cell forces the aggregate to false.
        verdicts[80] = CellVerdict::Incorrect;
        let report = CheckReport::new(verdicts);
        assert!(!report.all_correct());
        assert_eq!(report.incorrect_count(), 1);
        assert_eq!(
            report.verdict(Position::from_index(80)),
            CellVerdict::Incorrect
        );
    }
}

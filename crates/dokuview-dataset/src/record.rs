//! Dataset records.

use serde::Deserialize;

/// One quiz/solution pair from the dataset.
///
/// Both fields are 81-character digit strings in row-major order; `'0'`
/// marks a blank in the quiz. The solution is trusted to be a valid,
/// fully-solved grid — the store checks its shape at load time but never
/// verifies it against sudoku rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleRecord {
    /// The puzzle as presented to the user.
    #[serde(rename = "quizzes")]
    pub quiz: String,
    /// The fully-filled grid the quiz is checked against.
    #[serde(rename = "solutions")]
    pub solution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_dataset_columns() {
        let csv = "quizzes,solutions\nabc,def\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record: PuzzleRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(
            record,
            PuzzleRecord {
                quiz: String::from("abc"),
                solution: String::from("def"),
            }
        );
    }
}

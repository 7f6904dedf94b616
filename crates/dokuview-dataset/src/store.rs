//! CSV-backed puzzle store.

use std::{io, path::Path};

use dokuview_core::{DigitGrid, ParseGridError};
use rand::{Rng, seq::IndexedRandom};

use crate::PuzzleRecord;

/// Errors that can occur while loading the dataset.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DatasetError {
    /// The dataset file is missing, unreadable, or not valid CSV.
    #[display("failed to read dataset: {_0}")]
    Unreadable(#[from] csv::Error),
    /// No record survived validation (or the file had no data rows).
    #[display("dataset contains no usable records")]
    NoUsableRecords,
}

/// The loaded puzzle dataset.
///
/// Holds every usable quiz/solution record, immutable for the process
/// lifetime, and supplies uniformly-random records on request. Selection
/// is with replacement; repeats across a session are allowed.
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    records: Vec<PuzzleRecord>,
}

impl PuzzleStore {
    /// Loads the dataset from a CSV file with `quizzes`/`solutions`
    /// columns.
    ///
    /// Records whose strings are not 81 digit characters, or whose
    /// solution grid has blanks, are skipped with a warning — never
    /// truncated or padded to fit.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Unreadable`] if the file cannot be read and
    /// [`DatasetError::NoUsableRecords`] if no record survives validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_csv_reader(csv::Reader::from_path(path)?)
    }

    /// Loads the dataset from any CSV source, e.g. an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PuzzleStore::load`].
    pub fn from_reader<R: io::Read>(source: R) -> Result<Self, DatasetError> {
        Self::from_csv_reader(csv::Reader::from_reader(source))
    }

    fn from_csv_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        let mut skipped = 0_usize;

        for (row, result) in reader.deserialize::<PuzzleRecord>().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("skipping dataset row {row}: {err}");
                    skipped += 1;
                    continue;
                }
            };
            if let Err(fault) = validate_record(&record) {
                log::warn!("skipping dataset row {row}: {fault}");
                skipped += 1;
                continue;
            }
            records.push(record);
        }

        if skipped > 0 {
            log::warn!("{skipped} dataset row(s) were skipped");
        }
        if records.is_empty() {
            return Err(DatasetError::NoUsableRecords);
        }
        log::info!("loaded {} puzzle record(s)", records.len());
        Ok(Self { records })
    }

    /// Returns a uniformly-random record. Selection has no side effects on
    /// the store.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &PuzzleRecord {
        self.records
            .choose(rng)
            .expect("a loaded store always holds at least one record")
    }

    /// Returns the number of usable records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records. Never true for a
    /// store that loaded successfully.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the usable records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[PuzzleRecord] {
        &self.records
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum RecordFault {
    #[display("bad quiz string: {_0}")]
    Quiz(ParseGridError),
    #[display("bad solution string: {_0}")]
    Solution(ParseGridError),
    #[display("solution grid has blank cells")]
    IncompleteSolution,
}

fn validate_record(record: &PuzzleRecord) -> Result<(), RecordFault> {
    let _quiz: DigitGrid = record.quiz.parse().map_err(RecordFault::Quiz)?;
    let solution: DigitGrid = record.solution.parse().map_err(RecordFault::Solution)?;
    if !solution.is_complete() {
        return Err(RecordFault::IncompleteSolution);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const QUIZ: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn csv_with_rows(rows: &[(&str, &str)]) -> String {
        let mut csv = String::from("quizzes,solutions\n");
        for (quiz, solution) in rows {
            csv.push_str(quiz);
            csv.push(',');
            csv.push_str(solution);
            csv.push('\n');
        }
        csv
    }

    #[test]
    fn test_loads_valid_records() {
        let csv = csv_with_rows(&[(QUIZ, SOLUTION), (SOLUTION, SOLUTION)]);
        let store = PuzzleStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.records()[0].quiz, QUIZ);
        assert_eq!(store.records()[0].solution, SOLUTION);
    }

    #[test]
    fn test_skips_malformed_records() {
        let short_quiz = &QUIZ[..80];
        let incomplete_solution = QUIZ; // has blanks, unusable as a solution
        let csv = csv_with_rows(&[
            (short_quiz, SOLUTION),
            (QUIZ, incomplete_solution),
            (QUIZ, SOLUTION),
        ]);
        let store = PuzzleStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].quiz, QUIZ);
    }

    #[test]
    fn test_fails_without_usable_records() {
        let csv = csv_with_rows(&[("not-a-grid", "neither")]);
        let err = PuzzleStore::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::NoUsableRecords));

        let empty = csv_with_rows(&[]);
        let err = PuzzleStore::from_reader(empty.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::NoUsableRecords));
    }

    #[test]
    fn test_fails_on_missing_file() {
        let err = PuzzleStore::load("definitely-not-here.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Unreadable(_)));
    }

    #[test]
    fn test_pick_random_returns_stored_records() {
        let csv = csv_with_rows(&[(QUIZ, SOLUTION), (SOLUTION, SOLUTION)]);
        let store = PuzzleStore::from_reader(csv.as_bytes()).unwrap();

        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..50 {
            let record = store.pick_random(&mut rng);
            assert!(store.records().contains(record));
        }
    }

    #[test]
    fn test_pick_random_reaches_every_record() {
        let csv = csv_with_rows(&[(QUIZ, SOLUTION), (SOLUTION, SOLUTION)]);
        let store = PuzzleStore::from_reader(csv.as_bytes()).unwrap();

        // With replacement: a seeded run over a two-record store visits both.
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let record = store.pick_random(&mut rng);
            let index = store
                .records()
                .iter()
                .position(|candidate| candidate == record)
                .unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true, true]);
    }
}

//! Puzzle dataset loading and selection for dokuview.
//!
//! The dataset is a CSV file with header columns `quizzes` and `solutions`;
//! each data row is one puzzle record, each cell an 81-character digit
//! string (`'0'` marking a blank in the quiz). [`PuzzleStore`] loads the
//! file once, validates every record, and hands out uniformly-random
//! records for the rest of the process lifetime.
//!
//! Loading is the only I/O in the system; a missing or unreadable file is
//! fatal to startup, surfaced as [`DatasetError`].

pub mod record;
pub mod store;

pub use self::{
    record::PuzzleRecord,
    store::{DatasetError, PuzzleStore},
};

//! Puzzle session state for dokuview.
//!
//! A [`Game`] owns one quiz/solution pair plus the player's entries for
//! editable cells. It is the single source of truth for cell contents —
//! the UI synchronizes its widgets from [`Game::cell`] on every frame and
//! never holds state of its own.
//!
//! Sessions are replaced wholesale when a new puzzle loads; revealing the
//! solution is one-way for the session's lifetime.

pub mod cell_state;
pub mod check;
pub mod game;

pub use self::{
    cell_state::CellState,
    check::{CellVerdict, CheckReport},
    game::{Game, GameError},
};

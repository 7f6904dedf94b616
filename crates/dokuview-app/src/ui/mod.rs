//! UI widgets and the action requests they produce.

use dokuview_core::{Digit, Position};

pub mod game_screen;
pub mod grid;
pub mod keypad;
pub mod sidebar;

/// A user-triggered request produced by the widgets, applied by the app
/// after the frame is drawn. Each session operation maps 1:1 to one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCell(Position),
    SetDigit(Digit),
    RemoveDigit,
    Check,
    RevealSolution,
    NewPuzzle,
}

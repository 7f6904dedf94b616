//! Application state and event loop.
//!
//! # Design Notes
//! - Desktop-focused board with a 9x9 grid and clear 3x3 boundaries.
//! - Keyboard-driven input (digits, arrows, delete/backspace) with mouse
//!   selection.
//! - Session state lives in [`Game`], never in widgets; the check report
//!   is presentation state owned here and dropped on any change that
//!   would make it stale.

use dokuview_core::{Digit, Position};
use dokuview_dataset::PuzzleStore;
use dokuview_game::{CheckReport, Game};
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, InputState, Key},
};

use crate::ui::{self, Action};

#[derive(Debug)]
pub struct DokuviewApp {
    store: PuzzleStore,
    game: Game,
    selected_cell: Option<Position>,
    check_report: Option<CheckReport>,
}

/// Coarse session status shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No check has run since the last change.
    InProgress,
    /// The last check found every editable cell correct.
    AllCorrect,
    /// The last check found this many incorrect cells.
    Mistakes(usize),
    /// The solution is on display.
    Revealed,
}

impl DokuviewApp {
    pub fn new(_cc: &CreationContext<'_>, store: PuzzleStore) -> Self {
        let game = pick_game(&store);
        Self {
            store,
            game,
            selected_cell: None,
            check_report: None,
        }
    }

    fn status(&self) -> GameStatus {
        if self.game.is_revealed() {
            return GameStatus::Revealed;
        }
        match &self.check_report {
            Some(report) if report.all_correct() => GameStatus::AllCorrect,
            Some(report) => GameStatus::Mistakes(report.incorrect_count()),
            None => GameStatus::InProgress,
        }
    }

    fn new_puzzle(&mut self) {
        self.game = pick_game(&self.store);
        self.selected_cell = None;
        self.check_report = None;
    }

    fn check(&mut self) {
        if self.game.is_revealed() {
            return;
        }
        self.check_report = Some(self.game.check());
    }

    fn reveal_solution(&mut self) {
        self.game.reveal_solution();
        // Verdicts describe entries that are no longer on display.
        self.check_report = None;
    }

    fn set_digit(&mut self, digit: Digit) {
        if let Some(pos) = self.selected_cell
            && self.game.set_digit(pos, digit).is_ok()
        {
            self.check_report = None;
        }
    }

    fn remove_digit(&mut self) {
        if let Some(pos) = self.selected_cell
            && self.game.clear_digit(pos).is_ok()
        {
            self.check_report = None;
        }
    }

    fn handle_input(&mut self, i: &InputState) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);
        if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
            self.new_puzzle();
        }
        if i.key_pressed(Key::ArrowUp) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.up() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowDown) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.down() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowLeft) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.left() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowRight) {
            let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.right() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::Escape) {
            self.selected_cell = None;
        }

        let pairs = [
            (Key::Delete, None),
            (Key::Backspace, None),
            (Key::Num1, Some(Digit::D1)),
            (Key::Num2, Some(Digit::D2)),
            (Key::Num3, Some(Digit::D3)),
            (Key::Num4, Some(Digit::D4)),
            (Key::Num5, Some(Digit::D5)),
            (Key::Num6, Some(Digit::D6)),
            (Key::Num7, Some(Digit::D7)),
            (Key::Num8, Some(Digit::D8)),
            (Key::Num9, Some(Digit::D9)),
        ];
        for (key, digit) in pairs {
            if i.key_pressed(key) {
                if let Some(digit) = digit {
                    self.set_digit(digit);
                } else {
                    self.remove_digit();
                }
            }
        }
    }

    fn apply_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SelectCell(pos) => self.selected_cell = Some(pos),
                Action::SetDigit(digit) => self.set_digit(digit),
                Action::RemoveDigit => self.remove_digit(),
                Action::Check => self.check(),
                Action::RevealSolution => self.reveal_solution(),
                Action::NewPuzzle => self.new_puzzle(),
            }
        }
    }
}

fn pick_game(store: &PuzzleStore) -> Game {
    let record = store.pick_random(&mut rand::rng());
    let game = Game::from_strings(&record.quiz, &record.solution)
        .expect("store records are validated at load");
    log::info!(
        "installed a new puzzle with {} blank cell(s)",
        game.given().blank_count()
    );
    game
}

impl App for DokuviewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.input(|i| self.handle_input(i));

        let mut actions = Vec::new();
        CentralPanel::default().show(ctx, |ui| {
            actions = ui::game_screen::show(
                ui,
                &self.game,
                self.status(),
                self.selected_cell,
                self.check_report.as_ref(),
            );
        });
        self.apply_actions(actions);
    }
}

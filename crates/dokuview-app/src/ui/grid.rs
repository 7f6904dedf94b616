//! The 9x9 board widget.

use std::sync::Arc;

use dokuview_core::{Digit, Position};
use dokuview_game::{CellState, CellVerdict, CheckReport, Game};
use eframe::egui::{Button, Color32, Grid, RichText, Stroke, StrokeKind, Ui, Vec2, Visuals};

use crate::ui::Action;

// Verdict tints work against both light and dark widget backgrounds.
const CORRECT_FILL: Color32 = Color32::from_rgb(0x2e, 0x5d, 0x34);
const INCORRECT_FILL: Color32 = Color32::from_rgb(0x6e, 0x2a, 0x2a);

/// Everything the grid needs to draw one frame.
#[derive(Debug, Clone)]
pub struct GridViewModel<'a> {
    game: &'a Game,
    check_report: Option<&'a CheckReport>,
    selected_cell: Option<Position>,
    selected_digit: Option<Digit>,
}

impl<'a> GridViewModel<'a> {
    pub fn new(
        game: &'a Game,
        check_report: Option<&'a CheckReport>,
        selected_cell: Option<Position>,
    ) -> Self {
        let selected_digit = selected_cell.and_then(|pos| game.cell(pos).as_digit());
        Self {
            game,
            check_report,
            selected_cell,
            selected_digit,
        }
    }

    fn cell_highlight(&self, cell_pos: Position) -> CellHighlight {
        let cell = self.game.cell(cell_pos);
        if Some(cell_pos) == self.selected_cell {
            return CellHighlight::Selected;
        }
        if let Some(report) = self.check_report
            && !cell.is_given()
        {
            return CellHighlight::Verdict(report.verdict(cell_pos));
        }
        if self.selected_digit.is_some_and(|d| Some(d) == cell.as_digit()) {
            CellHighlight::SameDigit
        } else if self
            .selected_cell
            .is_some_and(|p| is_same_home(p, cell_pos))
        {
            CellHighlight::SameHome
        } else {
            CellHighlight::None
        }
    }

    fn cell_text(&self, pos: Position, visuals: &Visuals) -> RichText {
        match self.game.cell(pos) {
            CellState::Given(digit) => {
                RichText::new(digit.as_str()).color(visuals.strong_text_color())
            }
            CellState::Filled(digit) => RichText::new(digit.as_str()).color(visuals.text_color()),
            CellState::Revealed(digit) => {
                RichText::new(digit.as_str()).color(visuals.hyperlink_color)
            }
            CellState::Empty => RichText::new(""),
        }
    }

    fn inactive_border_color(visuals: &Visuals) -> Color32 {
        visuals.widgets.inactive.fg_stroke.color
    }

    fn grid_thick_border(visuals: &Visuals) -> Stroke {
        Stroke::new(3.0, Self::inactive_border_color(visuals))
    }
}

fn is_same_home(pos1: Position, pos2: Position) -> bool {
    pos1.x() == pos2.x() || pos1.y() == pos2.y() || pos1.box_index() == pos2.box_index()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellHighlight {
    Selected,
    Verdict(CellVerdict),
    SameDigit,
    SameHome,
    None,
}

impl CellHighlight {
    fn fill_color(self, visuals: &Visuals) -> Color32 {
        match self {
            Self::Selected | Self::SameDigit => visuals.selection.bg_fill,
            Self::Verdict(CellVerdict::Correct) => CORRECT_FILL,
            Self::Verdict(CellVerdict::Incorrect) => INCORRECT_FILL,
            Self::SameHome => visuals.widgets.hovered.bg_fill,
            Self::Verdict(CellVerdict::Given) | Self::None => visuals.text_edit_bg_color(),
        }
    }

    fn border(self, visuals: &Visuals) -> Stroke {
        match self {
            Self::Selected => Stroke::new(6.0, visuals.selection.stroke.color),
            Self::Verdict(CellVerdict::Incorrect) => Stroke::new(2.0, visuals.error_fg_color),
            Self::SameDigit => Stroke::new(2.0, visuals.selection.stroke.color),
            Self::SameHome => Stroke::new(1.5, visuals.widgets.hovered.fg_stroke.color),
            Self::Verdict(CellVerdict::Correct | CellVerdict::Given) | Self::None => {
                Stroke::new(1.0, GridViewModel::inactive_border_color(visuals))
            }
        }
    }
}

pub fn show(ui: &mut Ui, vm: &GridViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let thick_border = GridViewModel::grid_thick_border(visuals);

    let grid_size = ui.available_size().min_elem();
    let cell_size = grid_size / 9.0;

    Grid::new(ui.id().with("outer_board"))
        .spacing((0.0, 0.0))
        .min_col_width(cell_size * 3.0)
        .min_row_height(cell_size * 3.0)
        .show(ui, |ui| {
            for box_row in 0..3 {
                for box_col in 0..3 {
                    let box_index = box_row * 3 + box_col;
                    let grid = Grid::new(ui.id().with(format!("inner_box_{box_row}_{box_col}")))
                        .spacing((0.0, 0.0))
                        .min_col_width(cell_size)
                        .min_row_height(cell_size)
                        .show(ui, |ui| {
                            for cell_row in 0..3 {
                                for cell_col in 0..3 {
                                    let cell_index = cell_row * 3 + cell_col;
                                    let pos = Position::from_box(box_index, cell_index);
                                    let text = vm.cell_text(pos, visuals).size(cell_size * 0.8);
                                    let highlight = vm.cell_highlight(pos);
                                    let button = Button::new(text)
                                        .min_size(Vec2::splat(cell_size))
                                        .fill(highlight.fill_color(visuals));
                                    let button = ui.add(button);
                                    ui.painter().rect_stroke(
                                        button.rect,
                                        0.0,
                                        highlight.border(visuals),
                                        StrokeKind::Inside,
                                    );
                                    if button.clicked() {
                                        actions.push(Action::SelectCell(pos));
                                    }
                                }
                                ui.end_row();
                            }
                        });
                    ui.painter().rect_stroke(
                        grid.response.rect,
                        0.0,
                        thick_border,
                        StrokeKind::Inside,
                    );
                }
                ui.end_row();
            }
        });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIZ: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn game() -> Game {
        Game::from_strings(QUIZ, SOLUTION).unwrap()
    }

    #[test]
    fn test_selection_beats_everything() {
        let game = game();
        let report = game.check();
        let pos = Position::new(2, 0);
        let vm = GridViewModel::new(&game, Some(&report), Some(pos));
        assert_eq!(vm.cell_highlight(pos), CellHighlight::Selected);
    }

    #[test]
    fn test_verdicts_color_editable_cells_only() {
        let game = game();
        let report = game.check();
        let vm = GridViewModel::new(&game, Some(&report), None);

        // (2, 0) is blank in the quiz: incorrect while unattempted.
        assert_eq!(
            vm.cell_highlight(Position::new(2, 0)),
            CellHighlight::Verdict(CellVerdict::Incorrect)
        );
        // (0, 0) is a given: no verdict coloring.
        assert_eq!(vm.cell_highlight(Position::new(0, 0)), CellHighlight::None);
    }

    #[test]
    fn test_correct_entry_gets_correct_verdict_color() {
        let mut game = game();
        let pos = Position::new(2, 0);
        game.set_digit(pos, Digit::D4).unwrap(); // solution digit at (2, 0)
        let report = game.check();
        let vm = GridViewModel::new(&game, Some(&report), None);
        assert_eq!(
            vm.cell_highlight(pos),
            CellHighlight::Verdict(CellVerdict::Correct)
        );
    }

    #[test]
    fn test_same_digit_and_home_highlights_without_report() {
        let game = game();
        let selected = Position::new(0, 0); // given 5
        let vm = GridViewModel::new(&game, None, Some(selected));

        // Another 5 on the board.
        let other_five = Position::ALL
            .into_iter()
            .find(|pos| *pos != selected && game.cell(*pos).as_digit() == Some(Digit::D5))
            .unwrap();
        assert_eq!(vm.cell_highlight(other_five), CellHighlight::SameDigit);

        // Same row, different digit.
        assert_eq!(
            vm.cell_highlight(Position::new(4, 0)),
            CellHighlight::SameHome
        );
        // Unrelated cell.
        assert_eq!(vm.cell_highlight(Position::new(8, 4)), CellHighlight::None);
    }
}

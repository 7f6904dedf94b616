//! Top-level screen layout: board, keypad, sidebar.

use dokuview_core::Position;
use dokuview_game::{CheckReport, Game};
use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    app::GameStatus,
    ui::{self, Action, grid::GridViewModel},
};

pub fn show(
    ui: &mut Ui,
    game: &Game,
    status: GameStatus,
    selected_cell: Option<Position>,
    check_report: Option<&CheckReport>,
) -> Vec<Action> {
    let mut actions = vec![];
    let grid_vm = GridViewModel::new(game, check_report, selected_cell);

    StripBuilder::new(ui)
        .size(Size::relative(0.75))
        .size(Size::relative(0.25))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::relative(9.0 / (9.0 + 2.0)))
                    .size(Size::relative(2.0 / (9.0 + 2.0)))
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            actions.extend(ui::grid::show(ui, &grid_vm));
                        });
                        strip.cell(|ui| {
                            actions.extend(ui::keypad::show(ui, game, selected_cell));
                        });
                    });
            });
            strip.cell(|ui| {
                actions.extend(ui::sidebar::show(ui, status));
            });
        });
    actions
}

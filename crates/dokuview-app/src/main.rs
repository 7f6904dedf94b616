//! Dokuview desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Dokuview application. The
//! puzzle dataset is loaded before any window exists; without it there is
//! nothing to show, so a load failure terminates the process.

use std::process::ExitCode;

use dokuview_dataset::PuzzleStore;
use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::app::DokuviewApp;

mod app;
mod ui;

/// Dataset file expected in the working directory.
const DATASET_PATH: &str = "sudoku.csv";

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let store = match PuzzleStore::load(DATASET_PATH) {
        Ok(store) => store,
        Err(err) => {
            log::error!("cannot start without the puzzle dataset: {err}");
            eprintln!("error: {DATASET_PATH}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Dokuview",
        options,
        Box::new(move |cc| Ok(Box::new(DokuviewApp::new(cc, store)))),
    );
    if let Err(err) = result {
        log::error!("eframe exited with an error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

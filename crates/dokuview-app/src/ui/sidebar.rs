//! Status line and session controls.

use std::borrow::Cow;

use eframe::egui::{Button, RichText, Ui};

use crate::{app::GameStatus, ui::Action};

fn status_text(status: GameStatus) -> Cow<'static, str> {
    match status {
        GameStatus::InProgress => Cow::Borrowed("Puzzle in progress"),
        GameStatus::AllCorrect => Cow::Borrowed("You solved the puzzle!"),
        GameStatus::Mistakes(1) => Cow::Borrowed("1 entry is incorrect"),
        GameStatus::Mistakes(count) => Cow::Owned(format!("{count} entries are incorrect")),
        GameStatus::Revealed => Cow::Borrowed("Solution shown"),
    }
}

pub fn show(ui: &mut Ui, status: GameStatus) -> Vec<Action> {
    let mut actions = vec![];
    let can_play = status != GameStatus::Revealed;

    ui.vertical(|ui| {
        ui.label(RichText::new(status_text(status)).size(20.0));
        ui.add_space(10.0);

        let check = Button::new(RichText::new("Check").size(20.0));
        if ui.add_enabled(can_play, check).clicked() {
            actions.push(Action::Check);
        }
        let reveal = Button::new(RichText::new("Show Solution").size(20.0));
        if ui.add_enabled(can_play, reveal).clicked() {
            actions.push(Action::RevealSolution);
        }
        if ui
            .button(RichText::new("New Puzzle").size(20.0))
            .clicked()
        {
            actions.push(Action::NewPuzzle);
        }
    });
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(GameStatus::InProgress), "Puzzle in progress");
        assert_eq!(status_text(GameStatus::AllCorrect), "You solved the puzzle!");
        assert_eq!(status_text(GameStatus::Mistakes(1)), "1 entry is incorrect");
        assert_eq!(
            status_text(GameStatus::Mistakes(17)),
            "17 entries are incorrect"
        );
        assert_eq!(status_text(GameStatus::Revealed), "Solution shown");
    }
}

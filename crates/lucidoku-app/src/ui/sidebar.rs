use std::time::Duration;

use eframe::egui::{RichText, Ui};
use lucidoku_generator::Difficulty;

use crate::{app::GameStatus, ui::Action};

pub fn show(
    ui: &mut Ui,
    status: GameStatus,
    difficulty: Difficulty,
    elapsed: Duration,
) -> Vec<Action> {
    let mut actions = vec![];
    ui.vertical(|ui| {
        let text = match status {
            GameStatus::InProgress => "Game in progress",
            GameStatus::Solved => "Congratulations! You solved the puzzle!",
        };
        ui.label(RichText::new(text).size(20.0));
        ui.label(RichText::new(format_elapsed(elapsed)).size(20.0));
        ui.separator();

        for level in Difficulty::ALL {
            if ui
                .selectable_label(level == difficulty, level.as_str())
                .clicked()
            {
                // Takes effect on the next new game.
                actions.push(Action::SelectDifficulty(level));
            }
        }
        if ui.button(RichText::new("New Game").size(20.0)).clicked() {
            actions.push(Action::NewGame);
        }
    });
    actions
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

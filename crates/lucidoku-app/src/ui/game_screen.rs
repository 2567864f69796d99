use std::time::Duration;

use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use lucidoku_core::Position;
use lucidoku_generator::Difficulty;
use lucidoku_game::Game;

use crate::{
    app::GameStatus,
    ui::{self, Action, grid::GridViewModel},
};

pub fn show(
    ui: &mut Ui,
    game: &Game,
    status: GameStatus,
    selected_cell: Option<Position>,
    difficulty: Difficulty,
    elapsed: Duration,
) -> Vec<Action> {
    let mut actions = vec![];
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
                            let vm = GridViewModel::new(game, selected_cell);
                            actions.extend(ui::grid::show(ui, &vm));
                        });
                        strip.cell(|ui| {
                            actions.extend(ui::keypad::show(ui, game, selected_cell));
                        });
                    });
            });
            strip.cell(|ui| {
                actions.extend(ui::sidebar::show(ui, status, difficulty, elapsed));
            });
        });
    actions
}

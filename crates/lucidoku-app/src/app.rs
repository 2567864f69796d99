//! Application state and input handling.
//!
//! # Design Notes
//! - Desktop-focused, keyboard-driven input (digits, arrows, delete/backspace)
//!   with mouse selection.
//! - The UI modules emit [`Action`] values; the app applies them after the
//!   frame is drawn.
//! - The elapsed-time clock lives here, not in the engine: it starts on new
//!   game and freezes when `Game::is_solved()` first reports true.

use std::time::{Duration, Instant};

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, InputState, Key},
};
use lucidoku_core::{Digit, Position};
use lucidoku_generator::{Difficulty, PuzzleGenerator};
use lucidoku_game::Game;

use crate::ui::{self, Action, MoveDirection};

#[derive(Debug)]
pub struct LucidokuApp {
    game: Game,
    difficulty: Difficulty,
    selected_cell: Option<Position>,
    started_at: Instant,
    solved_after: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Solved,
}

impl LucidokuApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let difficulty = Difficulty::default();
        Self {
            game: new_game(difficulty),
            difficulty,
            selected_cell: None,
            started_at: Instant::now(),
            solved_after: None,
        }
    }

    fn status(&self) -> GameStatus {
        if self.solved_after.is_some() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    fn elapsed(&self) -> Duration {
        self.solved_after
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    fn new_game(&mut self) {
        self.game = new_game(self.difficulty);
        self.selected_cell = None;
        self.started_at = Instant::now();
        self.solved_after = None;
    }

    fn place(&mut self, value: Option<Digit>) {
        // A solved board is frozen until the next new game.
        if self.status() == GameStatus::Solved {
            return;
        }
        let Some(pos) = self.selected_cell else {
            return;
        };
        if self.game.place(pos, value) && self.game.is_solved() {
            self.solved_after = Some(self.started_at.elapsed());
        }
    }

    fn move_selection(&mut self, direction: MoveDirection) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);
        let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
        let next = match direction {
            MoveDirection::Up => pos.up(),
            MoveDirection::Down => pos.down(),
            MoveDirection::Left => pos.left(),
            MoveDirection::Right => pos.right(),
        };
        if let Some(next) = next {
            *pos = next;
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectCell(pos) => self.selected_cell = Some(pos),
            Action::ClearSelection => self.selected_cell = None,
            Action::MoveSelection(direction) => self.move_selection(direction),
            Action::SetDigit(digit) => self.place(Some(digit)),
            Action::RemoveDigit => self.place(None),
            Action::SelectDifficulty(difficulty) => self.difficulty = difficulty,
            Action::NewGame => self.new_game(),
        }
    }
}

fn new_game(difficulty: Difficulty) -> Game {
    let puzzle = PuzzleGenerator::new().generate(difficulty);
    log::info!(
        "generated {} puzzle with {} clues (seed {:#018x})",
        puzzle.difficulty,
        puzzle.clue_count(),
        puzzle.seed
    );
    Game::new(puzzle)
}

fn input_actions(i: &InputState) -> Vec<Action> {
    let mut actions = vec![];

    if (i.modifiers.ctrl || i.modifiers.command) && i.key_pressed(Key::N) {
        actions.push(Action::NewGame);
    }
    if i.key_pressed(Key::ArrowUp) {
        actions.push(Action::MoveSelection(MoveDirection::Up));
    }
    if i.key_pressed(Key::ArrowDown) {
        actions.push(Action::MoveSelection(MoveDirection::Down));
    }
    if i.key_pressed(Key::ArrowLeft) {
        actions.push(Action::MoveSelection(MoveDirection::Left));
    }
    if i.key_pressed(Key::ArrowRight) {
        actions.push(Action::MoveSelection(MoveDirection::Right));
    }
    if i.key_pressed(Key::Escape) {
        actions.push(Action::ClearSelection);
    }

    let pairs = [
        (Key::Delete, None),
        (Key::Backspace, None),
        (Key::Num0, None),
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
            match digit {
                Some(digit) => actions.push(Action::SetDigit(digit)),
                None => actions.push(Action::RemoveDigit),
            }
        }
    }

    actions
}

impl App for LucidokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut actions = ctx.input(|i| input_actions(i));

        CentralPanel::default().show(ctx, |ui| {
            actions.extend(ui::game_screen::show(
                ui,
                &self.game,
                self.status(),
                self.selected_cell,
                self.difficulty,
                self.elapsed(),
            ));
        });

        for action in actions {
            self.apply(action);
        }

        if self.status() == GameStatus::InProgress {
            // Keep the clock display ticking.
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

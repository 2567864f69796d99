use lucidoku_core::{Digit, Position};
use lucidoku_generator::Difficulty;

pub mod game_screen;
pub mod grid;
pub mod keypad;
pub mod sidebar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCell(Position),
    ClearSelection,
    MoveSelection(MoveDirection),
    SetDigit(Digit),
    RemoveDigit,
    SelectDifficulty(Difficulty),
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

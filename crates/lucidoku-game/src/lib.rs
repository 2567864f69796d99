//! Sudoku game session management.
//!
//! A [`Game`] wraps a generated puzzle and tracks player input on top of the
//! immutable clue cells. It exposes the query surface the UI needs: cell
//! values, editability, conflict highlighting, hypothetical-placement
//! validity, and the solved check.
//!
//! # Examples
//!
//! ```
//! use lucidoku_generator::{Difficulty, PuzzleGenerator};
//! use lucidoku_game::Game;
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let game = Game::new(puzzle);
//!
//! assert!(!game.is_solved()); // clues were removed, so the grid has holes
//! ```

use derive_more::{Display, Error};

mod cell_state;
mod game;

pub use self::{cell_state::CellState, game::Game};

/// Errors from game session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Player input was supplied for a given (clue) cell.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}

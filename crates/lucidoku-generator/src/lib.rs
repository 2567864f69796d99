//! Randomized Sudoku puzzle generation.
//!
//! A puzzle is produced in two steps: a fully solved grid is built by
//! seeding the three diagonal 3×3 boxes with random permutations and
//! completing the rest with randomized backtracking, then a
//! difficulty-dependent number of cells is removed to create the playable
//! problem.
//!
//! # Examples
//!
//! ```
//! use lucidoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Medium);
//!
//! assert!(puzzle.solution.is_full());
//! assert!(!puzzle.problem.is_full());
//! ```

mod difficulty;
mod generator;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
};

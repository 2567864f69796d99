//! Core data structures for the Lucidoku Sudoku engine.
//!
//! This crate provides the fundamental types shared by puzzle generation,
//! game session management, and the UI:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a validated (row, column) board coordinate
//! - [`DigitSet`]: a 9-bit set of digits
//! - [`House`]: a row, column, or 3×3 box
//! - [`DigitGrid`]: a 9×9 grid of optional digits
//!
//! # Examples
//!
//! ```
//! use lucidoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};

//! Per-cell game state.

use derive_more::IsVariant;
use lucidoku_core::Digit;

/// The state of a single cell in a game session.
///
/// `Given` cells are the puzzle's clues and reject edits for the lifetime of
/// the game; `Filled` cells hold player input. A given cell always holds a
/// digit, so an empty cell is never fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue placed by the generator.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// An empty cell.
    Empty,
}

impl CellState {
    /// Returns the digit held by the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D7).as_digit(), Some(Digit::D7));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_variant_queries() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Empty.is_given());
    }
}

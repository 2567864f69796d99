use lucidoku_core::{Digit, DigitGrid, DigitSet, House, Position};
use lucidoku_generator::GeneratedPuzzle;

use crate::{CellState, GameError};

/// A Sudoku game session.
///
/// Owns the board state exclusively: the clue cells from the generated
/// puzzle and the player's input on top of them. Clue cells are immutable
/// for the lifetime of the session; a new session replaces the state
/// wholesale (new game, restart, difficulty change).
///
/// Placement is permissive: any digit may be written into an editable cell
/// without a rule check, and rule violations are surfaced afterwards through
/// [`has_conflict`](Self::has_conflict). The solved check accepts any valid
/// completion, not just the generator's solution, which handles puzzles with
/// multiple solutions correctly.
///
/// # Example
///
/// ```
/// use lucidoku_core::Position;
/// use lucidoku_generator::{Difficulty, PuzzleGenerator};
/// use lucidoku_game::Game;
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Medium);
/// let mut game = Game::new(puzzle);
///
/// let pos = Position::new(0, 0);
/// if game.is_cell_editable(pos) {
///     assert!(game.place(pos, game.solution().get(pos)));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every clue in the puzzle's problem grid becomes a [`CellState::Given`]
    /// cell; the removed cells start [`CellState::Empty`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty: _,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Creates a game from a problem grid, its solution, and a grid of
    /// player-entered digits.
    ///
    /// Cells with digits in `problem` become givens; digits in `filled` are
    /// applied as player input.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `filled` holds a digit
    /// in a position that is a given in `problem`.
    pub fn from_parts(
        problem: &DigitGrid,
        solution: &DigitGrid,
        filled: &DigitGrid,
    ) -> Result<Self, GameError> {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        let mut this = Self {
            cells,
            solution: solution.clone(),
        };
        for pos in Position::ALL {
            if let Some(digit) = filled[pos]
                && !this.place(pos, Some(digit))
            {
                return Err(GameError::CannotModifyGivenCell);
            }
        }
        Ok(this)
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the digit at `pos`, given or player-entered; `None` if empty.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).as_digit()
    }

    /// Returns whether the cell at `pos` accepts player input.
    ///
    /// Constant-time; `false` exactly for the puzzle's clue cells.
    #[must_use]
    pub fn is_cell_editable(&self, pos: Position) -> bool {
        !self.cell(pos).is_given()
    }

    /// Writes player input at `pos`: a digit, or `None` to clear the cell.
    ///
    /// Returns `false` without mutating anything if the cell is a given.
    /// Once the editability check passes the write is unconditional: no rule
    /// check is applied, so conflicting entries can exist transiently and are
    /// reported by [`has_conflict`](Self::has_conflict).
    pub fn place(&mut self, pos: Position, value: Option<Digit>) -> bool {
        if !self.is_cell_editable(pos) {
            return false;
        }
        self.cells[pos.index()] = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        true
    }

    /// Returns whether hypothetically placing `digit` at `pos` would break no
    /// row, column, or box uniqueness constraint.
    ///
    /// Tests against the *other* cells only; whatever `pos` currently holds
    /// is ignored. Pure query, usable for UI hinting. Compare
    /// [`has_conflict`](Self::has_conflict), which inspects the value already
    /// present.
    #[must_use]
    pub fn is_valid(&self, pos: Position, digit: Digit) -> bool {
        pos.peers()
            .iter()
            .all(|&peer| self.value_at(peer) != Some(digit))
    }

    /// Returns whether the cell at `pos` holds a digit that also appears in
    /// its row, column, or box.
    ///
    /// Used for visual feedback; empty cells never conflict.
    #[must_use]
    pub fn has_conflict(&self, pos: Position) -> bool {
        self.value_at(pos).is_some_and(|digit| {
            pos.peers()
                .iter()
                .any(|&peer| self.value_at(peer) == Some(digit))
        })
    }

    /// Checks if the game is solved.
    ///
    /// A game is solved when every cell holds a digit and every row, column,
    /// and 3×3 box contains each of 1-9 exactly once. A merely full grid
    /// with duplicates is not solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if !Position::ALL.iter().all(|&pos| self.value_at(pos).is_some()) {
            return false;
        }
        House::ALL.iter().all(|house| {
            let mut seen = DigitSet::new();
            house
                .positions()
                .iter()
                .all(|&pos| self.value_at(pos).is_some_and(|digit| seen.insert(digit)))
        })
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the current board as a plain digit grid (givens and player
    /// input alike).
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.value_at(pos));
        }
        grid
    }

    /// Returns how many cells currently hold each digit, indexed by
    /// `digit.value() - 1`.
    ///
    /// Counts givens and player input alike; the keypad uses this for its
    /// remaining-digit badges.
    #[must_use]
    pub fn decided_digit_counts(&self) -> [usize; 9] {
        let mut counts = [0; 9];
        for pos in Position::ALL {
            if let Some(digit) = self.value_at(pos) {
                counts[usize::from(digit.value()) - 1] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use lucidoku_generator::{Difficulty, PuzzleGenerator};

    use super::*;

    const TEST_SOLUTION: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn test_solution_grid() -> DigitGrid {
        TEST_SOLUTION.parse().expect("valid solution grid")
    }

    fn generated_game() -> Game {
        Game::new(PuzzleGenerator::new().generate(Difficulty::Medium))
    }

    #[test]
    fn test_new_game_preserves_puzzle_structure() {
        let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
        let game = Game::new(puzzle.clone());

        for pos in Position::ALL {
            match puzzle.problem[pos] {
                Some(digit) => assert_eq!(game.cell(pos), CellState::Given(digit)),
                None => assert_eq!(game.cell(pos), CellState::Empty),
            }
        }
        assert_eq!(game.solution(), &puzzle.solution);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_place_fill_replace_clear() {
        let mut game = generated_game();
        let pos = Position::ALL
            .into_iter()
            .find(|&pos| game.cell(pos).is_empty())
            .expect("puzzle has empty cells");

        assert!(game.place(pos, Some(Digit::D5)));
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D5));

        assert!(game.place(pos, Some(Digit::D7)));
        assert_eq!(game.value_at(pos), Some(Digit::D7));

        assert!(game.place(pos, None));
        assert_eq!(game.cell(pos), CellState::Empty);
        assert_eq!(game.value_at(pos), None);
    }

    #[test]
    fn test_place_on_given_cells_is_rejected() {
        let mut game = generated_game();

        for pos in Position::ALL {
            if game.is_cell_editable(pos) {
                continue;
            }
            let before = game.value_at(pos);
            for digit in Digit::ALL {
                assert!(!game.place(pos, Some(digit)));
            }
            assert!(!game.place(pos, None));
            assert_eq!(game.value_at(pos), before);
        }
    }

    #[test]
    fn test_no_conflicts_after_generation() {
        let game = generated_game();
        for pos in Position::ALL {
            assert!(!game.has_conflict(pos));
        }
    }

    #[test]
    fn test_row_duplicate_conflicts_on_both_cells() {
        let solution = test_solution_grid();
        let mut problem = solution.clone();
        let hole = Position::new(0, 0); // solution digit here is 1
        problem.set(hole, None);

        let mut game =
            Game::from_parts(&problem, &solution, &DigitGrid::new()).expect("compatible grids");

        // Duplicate the 8 at (0, 1) within row 0.
        assert!(game.place(hole, Some(Digit::D8)));
        assert!(game.has_conflict(hole));
        assert!(game.has_conflict(Position::new(0, 1)));
        assert!(!game.is_solved());

        // Pure queries: repeated calls agree.
        assert!(game.has_conflict(hole));
        assert!(!game.is_solved());

        // The correct digit clears the conflicts and solves the grid.
        assert!(game.place(hole, Some(Digit::D1)));
        assert!(!game.has_conflict(hole));
        assert!(!game.has_conflict(Position::new(0, 1)));
        assert!(game.is_solved());
    }

    #[test]
    fn test_is_valid_excludes_own_cell() {
        let solution = test_solution_grid();
        let mut problem = solution.clone();
        let hole = Position::new(4, 4); // solution digit here is 7
        problem.set(hole, None);

        let mut game =
            Game::from_parts(&problem, &solution, &DigitGrid::new()).expect("compatible grids");

        assert!(game.is_valid(hole, Digit::D7));
        for digit in Digit::ALL {
            if digit != Digit::D7 {
                assert!(!game.is_valid(hole, digit));
            }
        }

        // A cell's own value does not invalidate re-placing the same digit.
        assert!(game.place(hole, Some(Digit::D7)));
        assert!(game.is_valid(hole, Digit::D7));
    }

    #[test]
    fn test_fully_given_grid_is_solved() {
        let solution = test_solution_grid();
        let game =
            Game::from_parts(&solution, &solution, &DigitGrid::new()).expect("compatible grids");
        assert!(game.is_solved());
        for pos in Position::ALL {
            assert!(!game.has_conflict(pos));
        }
    }

    #[test]
    fn test_full_grid_with_duplicates_is_not_solved() {
        let mut game = generated_game();
        for pos in Position::ALL {
            let _ = game.place(pos, Some(Digit::D1));
        }
        assert_eq!(game.to_digit_grid().empty_count(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_solving_from_the_answer_key() {
        let puzzle = PuzzleGenerator::new().generate(Difficulty::Hard);
        let mut game = Game::new(puzzle.clone());

        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let digit = puzzle.solution[pos].expect("solution is complete");
                assert!(game.place(pos, Some(digit)));
            }
        }
        assert!(game.is_solved());
        assert_eq!(game.to_digit_grid(), puzzle.solution);
    }

    #[test]
    fn test_from_parts_rejects_filled_over_given() {
        let solution = test_solution_grid();
        let problem: DigitGrid = format!("1{}", ".".repeat(80))
            .parse()
            .expect("valid problem grid");
        let filled: DigitGrid = format!("3{}", ".".repeat(80))
            .parse()
            .expect("valid filled grid");

        assert_eq!(
            Game::from_parts(&problem, &solution, &filled),
            Err(GameError::CannotModifyGivenCell)
        );

        let beside: DigitGrid = format!(".2{}", ".".repeat(79))
            .parse()
            .expect("valid filled grid");
        let game =
            Game::from_parts(&problem, &solution, &beside).expect("filled cell is editable");
        assert_eq!(game.cell(Position::new(0, 0)), CellState::Given(Digit::D1));
        assert_eq!(game.cell(Position::new(0, 1)), CellState::Filled(Digit::D2));
    }

    #[test]
    fn test_decided_digit_counts() {
        let mut game = generated_game();
        let empty: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| game.cell(pos).is_empty())
            .collect();
        let (first, second) = (empty[0], empty[1]);

        let before = game.decided_digit_counts()[4];
        assert!(game.place(first, Some(Digit::D5)));
        assert!(game.place(second, Some(Digit::D5)));
        assert_eq!(game.decided_digit_counts()[4], before + 2);

        let total: usize = game.decided_digit_counts().iter().sum();
        assert_eq!(total, game.to_digit_grid().filled_count());
    }
}

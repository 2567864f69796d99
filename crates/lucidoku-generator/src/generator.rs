//! The puzzle generator.

use lucidoku_core::{Digit, DigitGrid, Position};
use rand::{Rng, RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::Difficulty;

/// A generated puzzle: the playable problem grid and its answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with clues removed.
    pub problem: DigitGrid,
    /// The fully solved grid the problem was carved from.
    pub solution: DigitGrid,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The RNG seed; [`PuzzleGenerator::generate_with_seed`] reproduces the
    /// puzzle from it.
    pub seed: u64,
}

impl GeneratedPuzzle {
    /// Returns the number of clue cells in the problem grid.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.problem.filled_count()
    }
}

/// Generates Sudoku puzzles by randomized backtracking.
///
/// Generation first fills the three diagonal 3×3 boxes (box indices 0, 4,
/// and 8) with independent random permutations of 1-9; the diagonal boxes
/// share no row, column, or box, so no validity check is needed. The rest of
/// the grid is completed by a backtracking search that tries candidates in a
/// freshly shuffled order at every cell, which is what makes puzzles vary
/// from game to game. Finally a difficulty-dependent number of cells is
/// cleared to produce the problem.
///
/// The carved problem is not checked for solution uniqueness; some puzzles
/// admit more than one valid completion, and the game accepts any of them.
///
/// # Examples
///
/// ```
/// use lucidoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(Difficulty::Easy, 42);
///
/// // Same seed, same puzzle.
/// assert_eq!(puzzle, generator.generate_with_seed(Difficulty::Easy, 42));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {}

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generates a puzzle from OS entropy.
    ///
    /// Each call produces an independent puzzle; the consumed seed is
    /// recorded in the returned [`GeneratedPuzzle`].
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, rand::rng().random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let mut solution = DigitGrid::new();
        fill_diagonal_boxes(&mut solution, &mut rng);
        let completed = complete(&mut solution, &mut rng);
        // The search is exhaustive and the diagonal seeding cannot create a
        // contradiction, so completion always succeeds.
        assert!(completed, "backtracking failed to complete the grid");

        let mut problem = solution.clone();
        let removals = rng.random_range(difficulty.removal_range());
        remove_cells(&mut problem, removals, &mut rng);

        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }
}

fn fill_diagonal_boxes<R: Rng>(grid: &mut DigitGrid, rng: &mut R) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell_index, digit) in (0..9).zip(digits) {
            grid.set(Position::from_box(box_index, cell_index), Some(digit));
        }
    }
}

fn complete<R: Rng>(grid: &mut DigitGrid, rng: &mut R) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if fits(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if complete(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

fn fits(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.peers().iter().all(|&peer| grid.get(peer) != Some(digit))
}

fn remove_cells<R: Rng>(grid: &mut DigitGrid, count: u8, rng: &mut R) {
    let mut removed = 0;
    while removed < count {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if grid.get(pos).is_some() {
            grid.set(pos, None);
            removed += 1;
        }
    }
}

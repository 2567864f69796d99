//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one or more puzzles and prints the problem grid, the solution,
//! and the seed that reproduces them.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p lucidoku-generator --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run -p lucidoku-generator --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run -p lucidoku-generator --example generate_puzzle -- --seed 42
//! ```

use clap::{Parser, ValueEnum};
use lucidoku_core::{DigitGrid, Position};
use lucidoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to reproduce a specific puzzle (implies --count 1).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let generator = PuzzleGenerator::new();

    match args.seed {
        Some(seed) => {
            print_puzzle(&generator.generate_with_seed(difficulty, seed));
        }
        None => {
            for i in 0..args.count {
                if i > 0 {
                    println!();
                }
                print_puzzle(&generator.generate(difficulty));
            }
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Difficulty: {}", puzzle.difficulty);
    println!("Seed:       {}", puzzle.seed);
    println!("Clues:      {}", puzzle.clue_count());
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &DigitGrid) {
    for row in 0..9 {
        print!("  ");
        for col in 0..9 {
            match grid.get(Position::new(row, col)) {
                Some(digit) => print!("{digit} "),
                None => print!(". "),
            }
            if col == 2 || col == 5 {
                print!(" ");
            }
        }
        println!();
        if row == 2 || row == 5 {
            println!();
        }
    }
}

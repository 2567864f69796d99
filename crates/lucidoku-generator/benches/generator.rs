//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation process (diagonal seeding, backtracking
//! completion, and cell removal) at every difficulty level.
//!
//! Uses fixed seeds so runs are reproducible while still covering several
//! search shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use lucidoku_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u64; 3] = [
    0xc1d4_4bd6_afaf_8af6,
    0xa2b3_c4d5_e6f7_a8b9,
    0x1234_5678_90ab_cdef,
];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for difficulty in Difficulty::ALL {
        let group = format!("generate_{}", difficulty.as_str().to_ascii_lowercase());
        for (i, seed) in SEEDS.into_iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new(&group, format!("seed_{i}")),
                &seed,
                |b, &seed| {
                    b.iter_batched(
                        || hint::black_box(seed),
                        |seed| generator.generate_with_seed(difficulty, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets = bench_generate
);
criterion_main!(benches);

//! Benchmark for the end-to-end solve pipeline.
//!
//! Measures encoding, the engine run, and decoding on a published 9×9
//! puzzle with a unique solution.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solve
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use latinlace_core::PuzzleGrid;
use latinlace_solver::solution;

const PUZZLE: [&str; 9] = [
    "530070000",
    "600195000",
    "098000060",
    "800060003",
    "400803001",
    "700020006",
    "060000280",
    "000419005",
    "000080079",
];

fn puzzle_grid() -> PuzzleGrid<u32> {
    let mut grid = PuzzleGrid::classic(9).expect("9 is a perfect square");
    for (row, line) in PUZZLE.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch != '0' {
                let value = ch.to_digit(10).expect("puzzle lines hold digits");
                grid.set(row + 1, col + 1, value).expect("digit in alphabet");
            }
        }
    }
    grid
}

fn bench_solve_nine_by_nine(c: &mut Criterion) {
    let grid = puzzle_grid();

    c.bench_function("solve_9x9", |b| {
        b.iter(|| solution(hint::black_box(&grid)).expect("puzzle is solvable"));
    });
}

criterion_group!(benches, bench_solve_nine_by_nine);
criterion_main!(benches);

//! Feasibility solving for generalized Latin-square puzzles.
//!
//! This crate turns a [`PuzzleGrid`] into a boolean feasibility problem,
//! hands it to an external combinatorial engine, and writes the engine's
//! answer back into the grid. The pipeline has three stages, each its own
//! module:
//!
//! 1. [`encode`]: a pure transformation from grid to [`ConstraintSet`] -
//!    exact-one constraints over a rank-3 decision tensor covering cells,
//!    rows, columns, cages, and givens.
//! 2. [`engine`]: the narrow adapter around the engine. Constraints go in,
//!    a [`Verdict`] comes out; an engine fault is kept distinct from a
//!    proof of infeasibility.
//! 3. [`decode`]: installs a feasible assignment into the grid, staging
//!    and validating it first so failures never leave a half-written grid.
//!
//! [`solve`] runs the whole pipeline in place; [`solution`] does the same
//! against a copy. This is a pure feasibility query: no objective, no
//! solution enumeration, no uniqueness proof.
//!
//! [`PuzzleGrid`]: latinlace_core::PuzzleGrid
//!
//! # Examples
//!
//! ```
//! use latinlace_core::PuzzleGrid;
//! use latinlace_solver::{SolveFailure, solve};
//!
//! let mut grid = PuzzleGrid::classic(9)?;
//! grid.set(1, 1, 5).unwrap();
//! grid.set(2, 4, 1).unwrap();
//!
//! match solve(&mut grid) {
//!     Ok(()) => assert!(grid.is_complete()),
//!     Err(SolveFailure::Infeasible) => println!("puzzle has no solution"),
//!     Err(SolveFailure::Engine { message }) => println!("engine fault: {message}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decode;
pub mod encode;
pub mod engine;
mod solve;

// Re-export commonly used types
pub use self::{
    encode::ConstraintSet,
    engine::Verdict,
    solve::{SolveFailure, solution, solve},
};

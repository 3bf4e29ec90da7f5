//! Core data model for generalized Latin-square puzzles.
//!
//! This crate provides the puzzle container shared by the encoding and
//! solving components: a square grid with configurable cage geometry and an
//! arbitrary ordered symbol alphabet, validated at every boundary.
//!
//! # Overview
//!
//! - [`grid`]: the [`PuzzleGrid`] container - dimensions, alphabet, sparse
//!   cells, and the construction/mutation invariants, along with the
//!   [`ConfigurationError`] and [`DomainError`] types that guard them.
//! - [`cage`]: [`CageShape`] geometry - block tiling validation and
//!   deterministic block iteration.
//!
//! # Examples
//!
//! ```
//! use latinlace_core::{CageShape, PuzzleGrid};
//!
//! // Classic Sudoku needs no configuration
//! let mut grid = PuzzleGrid::classic(9)?;
//! grid.set(1, 1, 5).unwrap();
//!
//! // Variants pick their own cage geometry and alphabet
//! let letters = PuzzleGrid::new(
//!     (6, 6),
//!     CageShape::new(2, 3),
//!     vec!['A', 'B', 'C', 'D', 'E', 'F'],
//! )?;
//! assert_eq!(letters.cage_shape().to_string(), "2x3");
//! # Ok::<(), latinlace_core::ConfigurationError>(())
//! ```

pub mod cage;
pub mod grid;

// Re-export commonly used types
pub use self::{
    cage::{CageBlock, CageShape},
    grid::{ConfigurationError, DomainError, PuzzleGrid, Symbol},
};

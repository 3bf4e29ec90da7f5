//! The puzzle grid container.

use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::CageShape;

/// Value types usable as puzzle symbols.
///
/// Alphabet membership tests and index lookups rely on equality and hashing,
/// so both are total over the symbol type; `Debug` and `Display` appear in
/// diagnostics and error messages. The trait is blanket-implemented for every
/// type with the required capabilities.
pub trait Symbol: Clone + Eq + Hash + Debug + Display {}

impl<T: Clone + Eq + Hash + Debug + Display> Symbol for T {}

/// Errors detected when constructing a [`PuzzleGrid`].
///
/// Each variant names the invariant that failed. Construction never repairs
/// invalid input; the error is surfaced to the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// The requested dimensions are not square.
    #[display("grid is {rows}x{cols}, puzzles require square dimensions")]
    NonSquare {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A cage side does not divide the grid side.
    #[display("cage shape {cage} does not divide a side of length {n}")]
    CageDoesNotDivide {
        /// The offending cage shape.
        cage: CageShape,
        /// Grid side length.
        n: usize,
    },
    /// The cage area differs from the symbol count.
    #[display("cage shape {cage} must cover exactly {n} cells on a {n}x{n} grid")]
    CageAreaMismatch {
        /// The offending cage shape.
        cage: CageShape,
        /// Grid side length.
        n: usize,
    },
    /// The alphabet length differs from the grid side.
    #[display("alphabet has {len} symbols, a {n}x{n} puzzle needs exactly {n}")]
    AlphabetLength {
        /// Number of symbols supplied.
        len: usize,
        /// Grid side length.
        n: usize,
    },
    /// The alphabet repeats a symbol.
    #[display("alphabet repeats the symbol at index {index}")]
    DuplicateSymbol {
        /// 0-based index of the second occurrence.
        index: usize,
    },
    /// A default square cage was requested for a side without a square root.
    #[display("{n} is not a perfect square, pass an explicit cage shape")]
    NotPerfectSquare {
        /// Grid side length.
        n: usize,
    },
}

/// Error returned by [`PuzzleGrid::set`] when a value is not part of the
/// grid's alphabet.
///
/// The rejected write leaves the grid unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("symbol {symbol} is not part of the puzzle alphabet")]
pub struct DomainError<T: Symbol> {
    /// The rejected symbol.
    pub symbol: T,
}

/// A generalized Latin-square puzzle grid.
///
/// The grid owns its dimensions, cage geometry, and ordered symbol alphabet,
/// all fixed and validated at construction. Cells are sparse: a cell is
/// either unfilled or holds one alphabet symbol, and every write is
/// re-validated against the alphabet.
///
/// Coordinates are 1-based and range over `[1, n]` for both rows and
/// columns.
///
/// # Examples
///
/// Zero-configuration classic Sudoku:
///
/// ```
/// use latinlace_core::PuzzleGrid;
///
/// let mut grid = PuzzleGrid::classic(9)?;
/// grid.set(1, 1, 5).unwrap();
/// assert_eq!(grid.get(1, 1), Some(&5));
/// assert_eq!(grid.get(1, 2), None);
/// # Ok::<(), latinlace_core::ConfigurationError>(())
/// ```
///
/// A 6×6 variant with 2×3 cages over a letter alphabet:
///
/// ```
/// use latinlace_core::{CageShape, PuzzleGrid};
///
/// let alphabet = vec!['A', 'B', 'C', 'D', 'E', 'F'];
/// let mut grid = PuzzleGrid::new((6, 6), CageShape::new(2, 3), alphabet)?;
/// grid.set(1, 1, 'C').unwrap();
/// assert!(grid.set(1, 2, 'Z').is_err());
/// # Ok::<(), latinlace_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid<T: Symbol> {
    size: usize,
    cage: CageShape,
    alphabet: Vec<T>,
    indices: HashMap<T, usize>,
    cells: HashMap<(usize, usize), usize>,
}

impl PuzzleGrid<u32> {
    /// Creates a classic puzzle of side `n`: square `√n × √n` cages and the
    /// alphabet `1..=n`.
    ///
    /// `classic(9)` is plain Sudoku.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NotPerfectSquare`] when `n` has no
    /// integer square root, such as `classic(5)`.
    pub fn classic(n: usize) -> Result<Self, ConfigurationError> {
        #[expect(clippy::cast_possible_truncation)]
        let alphabet = (1..=n).map(|value| value as u32).collect();
        Self::with_alphabet(n, alphabet)
    }
}

impl<T: Symbol> PuzzleGrid<T> {
    /// Creates a grid with explicit dimensions, cage shape, and alphabet.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the dimensions are not square,
    /// the cage shape does not partition the grid into blocks of `n` cells,
    /// the alphabet does not hold exactly `n` symbols, or the alphabet
    /// repeats a symbol.
    pub fn new(
        dims: (usize, usize),
        cage: CageShape,
        alphabet: Vec<T>,
    ) -> Result<Self, ConfigurationError> {
        let (rows, cols) = dims;
        if rows != cols {
            return Err(ConfigurationError::NonSquare { rows, cols });
        }
        let n = rows;
        if cage.rows() == 0 || cage.cols() == 0 || n % cage.rows() != 0 || n % cage.cols() != 0 {
            return Err(ConfigurationError::CageDoesNotDivide { cage, n });
        }
        if cage.area() != n {
            return Err(ConfigurationError::CageAreaMismatch { cage, n });
        }
        if alphabet.len() != n {
            return Err(ConfigurationError::AlphabetLength {
                len: alphabet.len(),
                n,
            });
        }
        let mut indices = HashMap::with_capacity(n);
        for (k, symbol) in alphabet.iter().enumerate() {
            if indices.insert(symbol.clone(), k).is_some() {
                return Err(ConfigurationError::DuplicateSymbol { index: k });
            }
        }
        Ok(Self {
            size: n,
            cage,
            alphabet,
            indices,
            cells: HashMap::new(),
        })
    }

    /// Creates a grid of side `n` with square `√n × √n` cages and a custom
    /// alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NotPerfectSquare`] when `n` has no
    /// integer square root, or any error [`PuzzleGrid::new`] reports for the
    /// alphabet.
    pub fn with_alphabet(n: usize, alphabet: Vec<T>) -> Result<Self, ConfigurationError> {
        let cage = CageShape::square(n).ok_or(ConfigurationError::NotPerfectSquare { n })?;
        Self::new((n, n), cage, alphabet)
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Grid dimensions as `(rows, cols)`; always square.
    #[must_use]
    pub const fn dims(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    /// Cage shape partitioning the grid.
    #[must_use]
    pub const fn cage_shape(&self) -> CageShape {
        self.cage
    }

    /// The ordered symbol alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &[T] {
        &self.alphabet
    }

    /// Returns the alphabet index of `symbol`, or `None` when it is not part
    /// of the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: &T) -> Option<usize> {
        self.indices.get(symbol).copied()
    }

    /// Returns the symbol at `(row, col)`, or `None` when the cell is
    /// unfilled.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `[1, n]`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let key = self.cell_key(row, col);
        self.cells.get(&key).map(|&k| &self.alphabet[k])
    }

    /// Stores `value` at `(row, col)`, overwriting any previous symbol.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when `value` is not part of the alphabet;
    /// the cell keeps its previous state.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `[1, n]`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), DomainError<T>> {
        let key = self.cell_key(row, col);
        match self.indices.get(&value) {
            Some(&k) => {
                self.cells.insert(key, k);
                Ok(())
            }
            None => Err(DomainError { symbol: value }),
        }
    }

    /// Clears `(row, col)`, returning the removed symbol when the cell was
    /// filled.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is outside `[1, n]`.
    pub fn clear(&mut self, row: usize, col: usize) -> Option<&T> {
        let key = self.cell_key(row, col);
        let k = self.cells.remove(&key)?;
        Some(&self.alphabet[k])
    }

    /// Iterates the filled cells row-major as 1-based `(row, col, symbol)`.
    ///
    /// The order depends only on cell coordinates, never on insertion order.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.filled_indices()
            .map(|(row, col, k)| (row, col, &self.alphabet[k]))
    }

    /// Iterates the filled cells row-major as 1-based `(row, col)` plus the
    /// stored symbol's alphabet index.
    ///
    /// Like [`PuzzleGrid::filled`], the order depends only on cell
    /// coordinates.
    pub fn filled_indices(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let n = self.size;
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| {
                self.cells
                    .get(&(row, col))
                    .map(|&k| (row + 1, col + 1, k))
            })
        })
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.size * self.size
    }

    /// Returns `true` when no symbol repeats within any row, column, or cage
    /// among the filled cells.
    ///
    /// Unfilled cells are ignored, so a partially filled grid is consistent
    /// as long as its givens do not conflict.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.size;
        let mut seen = vec![false; n];

        for row in 0..n {
            seen.fill(false);
            for col in 0..n {
                if !self.mark(&mut seen, row, col) {
                    return false;
                }
            }
        }
        for col in 0..n {
            seen.fill(false);
            for row in 0..n {
                if !self.mark(&mut seen, row, col) {
                    return false;
                }
            }
        }
        for block in self.cage.blocks(n) {
            seen.fill(false);
            for (row, col) in block.cells() {
                if !self.mark(&mut seen, row, col) {
                    return false;
                }
            }
        }
        true
    }

    /// Marks the symbol at 0-based `(row, col)` in `seen`; `false` on repeat.
    fn mark(&self, seen: &mut [bool], row: usize, col: usize) -> bool {
        let Some(&k) = self.cells.get(&(row, col)) else {
            return true;
        };
        if seen[k] {
            return false;
        }
        seen[k] = true;
        true
    }

    /// Converts 1-based coordinates to the 0-based cell key.
    fn cell_key(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            (1..=self.size).contains(&row) && (1..=self.size).contains(&col),
            "cell ({row}, {col}) is outside the {n}x{n} grid",
            n = self.size
        );
        (row - 1, col - 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::CageShape;

    #[test]
    fn test_classic_construction() {
        let grid = PuzzleGrid::classic(9).unwrap();
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.dims(), (9, 9));
        assert_eq!(grid.cage_shape(), CageShape::new(3, 3));
        assert_eq!(grid.alphabet(), (1..=9).collect::<Vec<u32>>());
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_classic_rejects_non_square_side() {
        assert_eq!(
            PuzzleGrid::classic(5),
            Err(ConfigurationError::NotPerfectSquare { n: 5 })
        );
    }

    #[test]
    fn test_new_rejects_non_square_dims() {
        let result = PuzzleGrid::new((4, 5), CageShape::new(2, 2), vec![1u32, 2, 3, 4]);
        assert_eq!(
            result,
            Err(ConfigurationError::NonSquare { rows: 4, cols: 5 })
        );
    }

    #[test]
    fn test_new_rejects_cage_with_wrong_area() {
        // Both sides divide 6, but 2×2 blocks hold 4 cells, not 6
        let result = PuzzleGrid::new((6, 6), CageShape::new(2, 2), (1..=6u32).collect());
        assert_eq!(
            result,
            Err(ConfigurationError::CageAreaMismatch {
                cage: CageShape::new(2, 2),
                n: 6,
            })
        );
    }

    #[test]
    fn test_new_rejects_cage_that_does_not_divide() {
        let result = PuzzleGrid::new((6, 6), CageShape::new(4, 2), (1..=6u32).collect());
        assert_eq!(
            result,
            Err(ConfigurationError::CageDoesNotDivide {
                cage: CageShape::new(4, 2),
                n: 6,
            })
        );
    }

    #[test]
    fn test_new_accepts_rectangular_cage() {
        let grid = PuzzleGrid::new((6, 6), CageShape::new(2, 3), (1..=6u32).collect()).unwrap();
        assert_eq!(grid.cage_shape(), CageShape::new(2, 3));
    }

    #[test]
    fn test_new_rejects_alphabet_length_mismatch() {
        let result = PuzzleGrid::new((4, 4), CageShape::new(2, 2), vec![1u32, 2, 3]);
        assert_eq!(
            result,
            Err(ConfigurationError::AlphabetLength { len: 3, n: 4 })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_symbols() {
        let result = PuzzleGrid::new((4, 4), CageShape::new(2, 2), vec![1u32, 1, 2, 3]);
        assert_eq!(result, Err(ConfigurationError::DuplicateSymbol { index: 1 }));
    }

    #[test]
    fn test_set_get_clear_roundtrip() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        assert_eq!(grid.get(2, 3), None);

        grid.set(2, 3, 4).unwrap();
        assert_eq!(grid.get(2, 3), Some(&4));
        assert_eq!(grid.filled_count(), 1);

        assert_eq!(grid.clear(2, 3), Some(&4));
        assert_eq!(grid.get(2, 3), None);
        assert_eq!(grid.clear(2, 3), None);
    }

    #[test]
    fn test_set_overwrites_previous_symbol() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        grid.set(1, 1, 2).unwrap();
        grid.set(1, 1, 3).unwrap();
        assert_eq!(grid.get(1, 1), Some(&3));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_set_rejects_symbol_outside_alphabet() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        grid.set(1, 1, 2).unwrap();

        let before = grid.clone();
        assert_eq!(grid.set(1, 1, 9), Err(DomainError { symbol: 9 }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_index_of_is_total() {
        let grid =
            PuzzleGrid::with_alphabet(4, vec!['w', 'x', 'y', 'z']).unwrap();
        assert_eq!(grid.index_of(&'y'), Some(2));
        assert_eq!(grid.index_of(&'a'), None);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 grid")]
    fn test_get_panics_below_range() {
        let grid = PuzzleGrid::classic(4).unwrap();
        let _ = grid.get(0, 1);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 grid")]
    fn test_get_panics_above_range() {
        let grid = PuzzleGrid::classic(4).unwrap();
        let _ = grid.get(1, 5);
    }

    #[test]
    fn test_filled_iterates_row_major() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        // Insert out of order; iteration must not depend on it
        grid.set(3, 1, 2).unwrap();
        grid.set(1, 4, 1).unwrap();
        grid.set(1, 2, 3).unwrap();

        let cells: Vec<_> = grid
            .filled()
            .map(|(row, col, symbol)| (row, col, *symbol))
            .collect();
        assert_eq!(cells, [(1, 2, 3), (1, 4, 1), (3, 1, 2)]);
    }

    #[test]
    fn test_is_consistent() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        assert!(grid.is_consistent());

        grid.set(1, 1, 1).unwrap();
        grid.set(2, 2, 1).unwrap();
        // (1,1) and (2,2) share the top-left 2×2 cage
        assert!(!grid.is_consistent());

        grid.clear(2, 2).unwrap();
        grid.set(1, 3, 1).unwrap();
        // Same row now
        assert!(!grid.is_consistent());

        grid.clear(1, 3).unwrap();
        grid.set(3, 1, 1).unwrap();
        // Same column now
        assert!(!grid.is_consistent());

        grid.clear(3, 1).unwrap();
        grid.set(3, 3, 1).unwrap();
        assert!(grid.is_consistent());
    }

    proptest! {
        #[test]
        fn prop_set_then_get_returns_member_of_alphabet(
            row in 1usize..=9,
            col in 1usize..=9,
            k in 0usize..9,
        ) {
            let mut grid = PuzzleGrid::classic(9).unwrap();
            let symbol = grid.alphabet()[k];
            grid.set(row, col, symbol).unwrap();

            let stored = grid.get(row, col).unwrap();
            prop_assert!(grid.alphabet().contains(stored));
            prop_assert_eq!(*stored, symbol);
        }

        #[test]
        fn prop_out_of_alphabet_set_never_mutates(
            row in 1usize..=9,
            col in 1usize..=9,
            value in 10u32..1000,
        ) {
            let mut grid = PuzzleGrid::classic(9).unwrap();
            let before = grid.clone();
            prop_assert!(grid.set(row, col, value).is_err());
            prop_assert_eq!(grid, before);
        }
    }
}

//! Constraint encoding.
//!
//! [`encode`] turns a [`PuzzleGrid`] into a [`ConstraintSet`] over a fresh
//! rank-3 boolean decision tensor: variable `X[row, col, k]` means "the cell
//! at `(row, col)` holds the `k`-th alphabet symbol". Every constraint is an
//! exact-one over a group of variables, and generation order is fully
//! deterministic so that identical grids always produce identical models.

use latinlace_core::{PuzzleGrid, Symbol};

/// Identifier of one boolean decision variable.
///
/// Identifiers are dense: they range over `0..n³` for a puzzle of side `n`,
/// in the order defined by [`VarTensor::var`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Dense 0-based index of this variable.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Dense mapping between decision-tensor coordinates and [`VarId`]s.
///
/// The tensor exists only for the duration of one solve call; it carries no
/// cell values, just the coordinate scheme shared by the encoder, the engine
/// adapter, and the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarTensor {
    n: usize,
}

impl VarTensor {
    /// Creates the tensor for an `n × n × n` decision space.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// Side length of the underlying grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// Total number of decision variables (`n³`).
    #[must_use]
    pub const fn var_count(&self) -> usize {
        self.n * self.n * self.n
    }

    /// Variable meaning "the cell at 0-based `(row, col)` holds the `k`-th
    /// alphabet symbol".
    ///
    /// The mapping is row-major over `(row, col, k)`:
    /// `id = k + n·(col + n·row)`.
    #[must_use]
    pub const fn var(&self, row: usize, col: usize, k: usize) -> VarId {
        debug_assert!(row < self.n && col < self.n && k < self.n);
        VarId(k + self.n * (col + self.n * row))
    }
}

/// An exact-one constraint: of the listed variables, exactly one is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactlyOne {
    vars: Vec<VarId>,
}

impl ExactlyOne {
    const fn new(vars: Vec<VarId>) -> Self {
        Self { vars }
    }

    /// The constrained variables, in generation order.
    #[must_use]
    pub fn vars(&self) -> &[VarId] {
        &self.vars
    }
}

/// The complete constraint model for one solve call.
///
/// Produced by [`encode`]; consumed by the engine adapter. The model is a
/// pure feasibility query: there is no objective, only the exact-one groups
/// and the unit constraints pinning the givens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    tensor: VarTensor,
    exactly_one: Vec<ExactlyOne>,
    fixed: Vec<VarId>,
}

impl ConstraintSet {
    /// The decision tensor the constraints range over.
    #[must_use]
    pub const fn tensor(&self) -> VarTensor {
        self.tensor
    }

    /// The exact-one groups, in generation order.
    #[must_use]
    pub fn exactly_one(&self) -> &[ExactlyOne] {
        &self.exactly_one
    }

    /// Variables forced true by the grid's givens, in row-major cell order.
    #[must_use]
    pub fn fixed(&self) -> &[VarId] {
        &self.fixed
    }
}

/// Encodes `grid` into a [`ConstraintSet`] over a fresh decision tensor.
///
/// Four exact-one families are generated, in this order:
///
/// 1. cell-completeness - every cell holds exactly one symbol, cells
///    row-major;
/// 2. row-uniqueness - every symbol appears exactly once per row, by
///    `(row, k)`;
/// 3. column-uniqueness - by `(col, k)`;
/// 4. cage-uniqueness - every symbol appears exactly once per cage block,
///    blocks row-major, then by `k`.
///
/// Finally every given pins its tensor entry with a unit constraint, in
/// row-major cell order. The whole encoding is a pure function of the grid:
/// no ordering ever depends on hash-map iteration.
#[must_use]
pub fn encode<T: Symbol>(grid: &PuzzleGrid<T>) -> ConstraintSet {
    let n = grid.size();
    let tensor = VarTensor::new(n);
    let mut exactly_one = Vec::with_capacity(4 * n * n);

    // 1. each cell holds exactly one symbol
    for row in 0..n {
        for col in 0..n {
            exactly_one.push(ExactlyOne::new(
                (0..n).map(|k| tensor.var(row, col, k)).collect(),
            ));
        }
    }

    // 2. each symbol appears exactly once in each row
    for row in 0..n {
        for k in 0..n {
            exactly_one.push(ExactlyOne::new(
                (0..n).map(|col| tensor.var(row, col, k)).collect(),
            ));
        }
    }

    // 3. each symbol appears exactly once in each column
    for col in 0..n {
        for k in 0..n {
            exactly_one.push(ExactlyOne::new(
                (0..n).map(|row| tensor.var(row, col, k)).collect(),
            ));
        }
    }

    // 4. each symbol appears exactly once in each cage block
    for block in grid.cage_shape().blocks(n) {
        for k in 0..n {
            exactly_one.push(ExactlyOne::new(
                block.cells().map(|(row, col)| tensor.var(row, col, k)).collect(),
            ));
        }
    }

    // 5. givens pin their tensor entry
    let fixed = grid
        .filled_indices()
        .map(|(row, col, k)| tensor.var(row - 1, col - 1, k))
        .collect();

    ConstraintSet {
        tensor,
        exactly_one,
        fixed,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use latinlace_core::{CageShape, PuzzleGrid};

    use super::*;

    #[test]
    fn test_tensor_mapping_is_a_bijection() {
        let tensor = VarTensor::new(4);
        let ids: HashSet<_> = (0..4)
            .flat_map(|row| {
                (0..4).flat_map(move |col| (0..4).map(move |k| tensor.var(row, col, k)))
            })
            .collect();
        assert_eq!(ids.len(), tensor.var_count());
        assert!(ids.iter().all(|id| id.index() < tensor.var_count()));
    }

    #[test]
    fn test_group_and_variable_counts() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        grid.set(1, 1, 1).unwrap();
        grid.set(3, 4, 2).unwrap();

        let constraints = encode(&grid);
        assert_eq!(constraints.tensor().var_count(), 64);
        // 16 cells + 16 (row, symbol) + 16 (col, symbol) + 16 (cage, symbol)
        assert_eq!(constraints.exactly_one().len(), 64);
        assert_eq!(constraints.fixed().len(), 2);

        // Every group constrains exactly n variables
        assert!(
            constraints
                .exactly_one()
                .iter()
                .all(|group| group.vars().len() == 4)
        );
    }

    #[test]
    fn test_fixed_constraints_point_at_the_givens() {
        let mut grid = PuzzleGrid::classic(4).unwrap();
        grid.set(2, 3, 4).unwrap();

        let constraints = encode(&grid);
        let tensor = constraints.tensor();
        // Symbol 4 has alphabet index 3; cell (2, 3) is 0-based (1, 2)
        assert_eq!(constraints.fixed(), [tensor.var(1, 2, 3)]);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut grid = PuzzleGrid::classic(9).unwrap();
        grid.set(1, 1, 5).unwrap();
        grid.set(9, 9, 1).unwrap();

        assert_eq!(encode(&grid), encode(&grid));
    }

    #[test]
    fn test_encodes_rectangular_cages() {
        let grid =
            PuzzleGrid::new((6, 6), CageShape::new(2, 3), (1..=6u32).collect()).unwrap();
        let constraints = encode(&grid);

        // Cage groups are the last 36; the first covers block (0,0)..(1,2)
        let tensor = constraints.tensor();
        let cage_groups = &constraints.exactly_one()[3 * 36..];
        assert_eq!(cage_groups.len(), 36);
        assert_eq!(
            cage_groups[0].vars(),
            [
                tensor.var(0, 0, 0),
                tensor.var(0, 1, 0),
                tensor.var(0, 2, 0),
                tensor.var(1, 0, 0),
                tensor.var(1, 1, 0),
                tensor.var(1, 2, 0),
            ]
        );
    }
}

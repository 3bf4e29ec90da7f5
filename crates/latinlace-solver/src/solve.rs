use latinlace_core::{PuzzleGrid, Symbol};

use crate::{
    decode, encode,
    engine::{self, Verdict},
};

/// Failure of a solve call.
///
/// The two variants separate "the puzzle provably has no solution" from
/// "the engine failed to answer", so callers can branch on cause - an engine
/// fault may be worth retrying, a structurally infeasible puzzle is not.
/// Retrying is left entirely to the caller.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolveFailure {
    /// The constraints admit no assignment: the puzzle is unsolvable.
    #[display("no feasible assignment exists for the given grid")]
    Infeasible,
    /// The engine failed before producing an answer.
    #[display("solver engine failed: {message}")]
    Engine {
        /// Engine-reported description of the fault.
        message: String,
    },
}

/// Solves `grid` in place.
///
/// Encodes the grid into an exact-one constraint model, runs the engine,
/// and writes the resulting assignment back. On success every cell is
/// filled and all givens keep their original value; on failure the grid is
/// left exactly as it was.
///
/// The call blocks until the engine reaches a terminal answer; no timeout
/// or cancellation is offered at this layer.
///
/// # Errors
///
/// [`SolveFailure::Infeasible`] when no assignment satisfies the
/// constraints; [`SolveFailure::Engine`] when the engine fails to answer.
///
/// # Examples
///
/// ```
/// use latinlace_core::PuzzleGrid;
/// use latinlace_solver::solve;
///
/// let mut grid = PuzzleGrid::classic(4)?;
/// grid.set(1, 1, 1).unwrap();
/// solve(&mut grid)?;
/// assert!(grid.is_complete());
/// assert_eq!(grid.get(1, 1), Some(&1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve<T: Symbol>(grid: &mut PuzzleGrid<T>) -> Result<(), SolveFailure> {
    let constraints = encode::encode(grid);
    log::debug!(
        "encoded {n}x{n} puzzle: {vars} variables, {groups} exact-one groups, {givens} givens",
        n = grid.size(),
        vars = constraints.tensor().var_count(),
        groups = constraints.exactly_one().len(),
        givens = constraints.fixed().len(),
    );

    let verdict = engine::run(&constraints);
    match &verdict {
        Verdict::Feasible(_) => log::debug!("engine found a feasible assignment"),
        Verdict::Infeasible => log::debug!("engine proved infeasibility"),
        Verdict::Failed(message) => log::warn!("engine failed: {message}"),
    }

    decode::decode(grid, &verdict)
}

/// Returns a solved copy of `grid`, leaving the input untouched.
///
/// # Errors
///
/// Same failure modes as [`solve`].
///
/// # Examples
///
/// ```
/// use latinlace_core::PuzzleGrid;
/// use latinlace_solver::solution;
///
/// let grid = PuzzleGrid::classic(4)?;
/// let solved = solution(&grid)?;
/// assert!(solved.is_complete());
/// assert!(!grid.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solution<T: Symbol>(grid: &PuzzleGrid<T>) -> Result<PuzzleGrid<T>, SolveFailure> {
    let mut solved = grid.clone();
    solve(&mut solved)?;
    Ok(solved)
}

//! Writing a feasible verdict back into the grid.

use latinlace_core::{PuzzleGrid, Symbol};

use crate::{
    engine::{Assignment, Verdict},
    solve::SolveFailure,
};

/// Installs the assignment carried by `verdict` into `grid`.
///
/// On success every cell of `grid` is filled with the symbol its tensor
/// entry selects; givens necessarily keep their value, since their unit
/// constraint forced the matching entry.
///
/// # Errors
///
/// - [`SolveFailure::Infeasible`] when the verdict is
///   [`Verdict::Infeasible`];
/// - [`SolveFailure::Engine`] when the verdict is [`Verdict::Failed`], or
///   when the assignment does not select exactly one symbol for some cell
///   (an unsound engine answer).
///
/// In every error case `grid` is left untouched: the assignment is staged
/// and validated in full before the first write.
pub fn decode<T: Symbol>(grid: &mut PuzzleGrid<T>, verdict: &Verdict) -> Result<(), SolveFailure> {
    let assignment = match verdict {
        Verdict::Feasible(assignment) => assignment,
        Verdict::Infeasible => return Err(SolveFailure::Infeasible),
        Verdict::Failed(message) => {
            return Err(SolveFailure::Engine {
                message: message.clone(),
            });
        }
    };

    let staged = stage(grid.size(), assignment)?;

    for (cell, k) in staged.into_iter().enumerate() {
        let (row, col) = (cell / grid.size() + 1, cell % grid.size() + 1);
        let symbol = grid.alphabet()[k].clone();
        // Cannot fail: the symbol comes from the grid's own alphabet
        grid.set(row, col, symbol).map_err(|err| SolveFailure::Engine {
            message: err.to_string(),
        })?;
    }
    Ok(())
}

/// Extracts the selected alphabet index for every cell, row-major.
///
/// Rejects the whole assignment when any cell has zero or more than one
/// selected index.
fn stage(n: usize, assignment: &Assignment) -> Result<Vec<usize>, SolveFailure> {
    let mut staged = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let mut chosen = None;
            for k in 0..n {
                if assignment.is_set(row, col, k) {
                    if chosen.is_some() {
                        return Err(unsound(row, col));
                    }
                    chosen = Some(k);
                }
            }
            match chosen {
                Some(k) => staged.push(k),
                None => return Err(unsound(row, col)),
            }
        }
    }
    Ok(staged)
}

fn unsound(row: usize, col: usize) -> SolveFailure {
    SolveFailure::Engine {
        message: format!(
            "engine assignment does not select exactly one symbol for cell ({}, {})",
            row + 1,
            col + 1
        ),
    }
}

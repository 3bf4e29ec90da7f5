//! The boundary to the external combinatorial engine.
//!
//! This module is the only place that talks to the engine. [`run`] submits a
//! [`ConstraintSet`], blocks until the engine reaches a terminal answer, and
//! reports it as a [`Verdict`]. The engine's internals (search strategy,
//! propagation, restarts) are opaque here; the adapter only relies on the
//! answer being sound.
//!
//! Exact-one groups are lowered to clauses at this boundary: one
//! at-least-one clause over the group plus pairwise at-most-one clauses, and
//! a unit clause per fixed variable. The lowering is invisible to both the
//! encoder and the decoder.

use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

use crate::encode::{ConstraintSet, VarId, VarTensor};

/// A concrete boolean assignment for the whole decision tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    tensor: VarTensor,
    values: Vec<bool>,
}

impl Assignment {
    pub(crate) const fn new(tensor: VarTensor, values: Vec<bool>) -> Self {
        Self { tensor, values }
    }

    /// The decision tensor this assignment ranges over.
    #[must_use]
    pub const fn tensor(&self) -> VarTensor {
        self.tensor
    }

    /// Returns the value of `X[row, col, k]` (0-based coordinates).
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are outside the tensor.
    #[must_use]
    pub fn is_set(&self, row: usize, col: usize, k: usize) -> bool {
        self.value(self.tensor.var(row, col, k))
    }

    /// Returns the value assigned to `var`.
    ///
    /// # Panics
    ///
    /// Panics when `var` is outside the tensor.
    #[must_use]
    pub fn value(&self, var: VarId) -> bool {
        self.values[var.index()]
    }
}

/// Terminal answer of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The engine produced an assignment satisfying every constraint.
    Feasible(Assignment),
    /// The engine proved that no satisfying assignment exists.
    Infeasible,
    /// The engine failed before reaching an answer.
    ///
    /// Distinct from [`Verdict::Infeasible`]: the query was not answered.
    Failed(String),
}

/// Runs the engine on `constraints`, blocking until a terminal verdict.
///
/// The engine instance and its variables live only for the duration of this
/// call; nothing is retained between runs.
#[must_use]
pub fn run(constraints: &ConstraintSet) -> Verdict {
    let tensor = constraints.tensor();

    let mut solver = Solver::new();
    let vars: Vec<_> = (0..tensor.var_count()).map(|_| solver.new_var()).collect();

    let mut formula = CnfFormula::new();
    for group in constraints.exactly_one() {
        let lits: Vec<Lit> = group
            .vars()
            .iter()
            .map(|&var| Lit::from_var(vars[var.index()], true))
            .collect();
        // at least one of the group
        formula.add_clause(&lits);
        // at most one of the group
        for (i, &a) in lits.iter().enumerate() {
            for &b in &lits[i + 1..] {
                formula.add_clause(&[!a, !b]);
            }
        }
    }
    for &var in constraints.fixed() {
        formula.add_clause(&[Lit::from_var(vars[var.index()], true)]);
    }
    solver.add_formula(&formula);

    match solver.solve() {
        Ok(true) => {
            let Some(model) = solver.model() else {
                return Verdict::Failed("engine reported feasible without a model".into());
            };
            let mut values = vec![false; tensor.var_count()];
            for lit in model {
                let index = lit.var().index();
                if index < values.len() {
                    values[index] = lit.is_positive();
                }
            }
            Verdict::Feasible(Assignment::new(tensor, values))
        }
        Ok(false) => Verdict::Infeasible,
        Err(err) => Verdict::Failed(err.to_string()),
    }
}

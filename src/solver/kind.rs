//! Strategy registry.

use serde::{Deserialize, Serialize};

use crate::aco::AcoSolver;
use crate::bco::BcoSolver;
use crate::cost::CostMatrix;
use crate::exact::{BacktrackSolver, BranchBoundSolver};

use super::TspSolver;

/// The available solving strategies.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_engine::cost::CostMatrix;
/// use tsp_engine::solver::{SolverKind, TspSolver};
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
///
/// let mut solver = SolverKind::BranchAndBound.build(&matrix);
/// solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
/// assert_eq!(solver.best_cost(), 17.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverKind {
    /// Unpruned exhaustive backtracking (slow baseline).
    Backtrack,
    /// Backtracking with lower-bound pruning and least-cost-first ordering.
    BranchAndBound,
    /// Ant Colony Optimization.
    Aco,
    /// Bee Colony Optimization.
    Bco,
}

impl SolverKind {
    /// Every strategy, in baseline-first order.
    pub const ALL: [SolverKind; 4] = [
        SolverKind::Backtrack,
        SolverKind::BranchAndBound,
        SolverKind::Aco,
        SolverKind::Bco,
    ];

    /// Human-readable strategy name.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Backtrack => "backtracking",
            SolverKind::BranchAndBound => "branch-and-bound",
            SolverKind::Aco => "ant colony",
            SolverKind::Bco => "bee colony",
        }
    }

    /// Builds a fresh boxed solver of this kind bound to `problem`.
    ///
    /// Metaheuristics are built with their default configurations; use
    /// their `with_config` constructors directly for tuned runs.
    pub fn build<'a>(self, problem: &'a CostMatrix) -> Box<dyn TspSolver + 'a> {
        match self {
            SolverKind::Backtrack => Box::new(BacktrackSolver::new(problem)),
            SolverKind::BranchAndBound => Box::new(BranchBoundSolver::new(problem)),
            SolverKind::Aco => Box::new(AcoSolver::new(problem)),
            SolverKind::Bco => Box::new(BcoSolver::new(problem)),
        }
    }
}

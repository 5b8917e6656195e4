//! Comparative run harness.
//!
//! Runs every [`SolverKind`] on one problem instance with zero pacing and
//! collects the final cost and wall-clock time per strategy, ready for a
//! host to tabulate or chart.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::solver::{SolverKind, TspSolver};

/// Outcome of one solver run on one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Strategy that produced this result.
    pub kind: SolverKind,
    /// Final best cost; infinite when no cycle was found.
    pub best_cost: f64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Runs a single strategy to completion and records its result.
pub fn run_one(kind: SolverKind, problem: &CostMatrix) -> BenchmarkResult {
    let mut solver = kind.build(problem);
    solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
    BenchmarkResult {
        kind,
        best_cost: solver.best_cost(),
        elapsed: solver.elapsed(),
    }
}

/// Runs every strategy on the same instance, baseline first.
///
/// Each solver is constructed fresh, so runs are independent.
///
/// # Examples
///
/// ```
/// use tsp_engine::benchmark::run_all;
/// use tsp_engine::cost::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
/// let results = run_all(&matrix);
/// assert_eq!(results.len(), 4);
/// assert!(results.iter().all(|r| r.best_cost == 17.0));
/// ```
pub fn run_all(problem: &CostMatrix) -> Vec<BenchmarkResult> {
    SolverKind::ALL
        .iter()
        .map(|&kind| run_one(kind, problem))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_kinds_agree() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ]);
        let results = run_all(&matrix);
        assert_eq!(results.len(), SolverKind::ALL.len());

        let baseline = run_one(SolverKind::Backtrack, &matrix);
        let pruned = run_one(SolverKind::BranchAndBound, &matrix);
        assert_eq!(baseline.best_cost, pruned.best_cost);
        assert!(results.iter().all(|r| r.best_cost.is_finite()));
    }

    #[test]
    fn test_metaheuristics_never_beat_the_optimum() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 12.0, 10.0, 19.0, 8.0],
            vec![12.0, 0.0, 3.0, 7.0, 2.0],
            vec![10.0, 3.0, 0.0, 6.0, 20.0],
            vec![19.0, 7.0, 6.0, 0.0, 4.0],
            vec![8.0, 2.0, 20.0, 4.0, 0.0],
        ]);
        let optimum = run_one(SolverKind::BranchAndBound, &matrix).best_cost;
        for kind in [SolverKind::Aco, SolverKind::Bco] {
            let result = run_one(kind, &matrix);
            assert!(result.best_cost >= optimum, "{}", kind.name());
        }
    }
}

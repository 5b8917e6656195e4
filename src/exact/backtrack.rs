//! Exhaustive backtracking solver.
//!
//! # Algorithm
//!
//! Depth-first search from node 0 over every permutation of the remaining
//! nodes, with push/pop bookkeeping around each descent. The only branches
//! skipped are those crossing an unreachable edge; there is no pruning, so
//! the full (n-1)! space is explored. This is the baseline the pruned
//! [`BranchBoundSolver`](super::BranchBoundSolver) is measured against.
//!
//! # Complexity
//!
//! O((n-1)!) time, O(n) space. Intended only for small instances; larger
//! runs are expected to be cancelled externally.

use std::time::Duration;

use crate::cost::{is_reachable, CostMatrix};
use crate::solver::{pace, SolverState, TspSolver};

/// Unpruned depth-first TSP solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_engine::cost::CostMatrix;
/// use tsp_engine::exact::BacktrackSolver;
/// use tsp_engine::solver::TspSolver;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
/// let mut solver = BacktrackSolver::new(&matrix);
/// solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
/// assert_eq!(solver.best_cost(), 17.0);
/// ```
pub struct BacktrackSolver<'a> {
    problem: &'a CostMatrix,
    state: SolverState,
    cycles_evaluated: u64,
}

impl<'a> BacktrackSolver<'a> {
    /// Binds a fresh solver to one problem instance.
    pub fn new(problem: &'a CostMatrix) -> Self {
        Self {
            problem,
            state: SolverState::new(),
            cycles_evaluated: 0,
        }
    }

    /// Number of complete cycles whose closing edge was evaluated.
    pub fn cycles_evaluated(&self) -> u64 {
        self.cycles_evaluated
    }

    fn recurse(
        &mut self,
        current: usize,
        depth: usize,
        cost_so_far: f64,
        path: &mut Vec<usize>,
        visited: &mut [bool],
        on_improved: &mut dyn FnMut(&[usize]),
        step_delay: Duration,
    ) {
        if self.state.is_cancelled() {
            return;
        }

        let n = self.problem.num_nodes();
        if depth == n {
            self.cycles_evaluated += 1;
            let closing = self.problem.cost(current, 0);
            if !is_reachable(closing) {
                return;
            }
            let total = cost_so_far + closing;
            if total < self.state.best_cost() {
                path.push(0);
                self.state.record_best(path, total);
                on_improved(path);
                path.pop();
            }
            return;
        }

        for next in 0..n {
            if visited[next] {
                continue;
            }
            let edge = self.problem.cost(current, next);
            if !is_reachable(edge) {
                continue;
            }

            visited[next] = true;
            path.push(next);
            pace(step_delay);

            self.recurse(
                next,
                depth + 1,
                cost_so_far + edge,
                path,
                visited,
                on_improved,
                step_delay,
            );

            path.pop();
            visited[next] = false;
        }
    }
}

impl TspSolver for BacktrackSolver<'_> {
    fn state(&self) -> &SolverState {
        &self.state
    }

    fn solve(
        &mut self,
        on_improved: &mut dyn FnMut(&[usize]),
        on_finished: &mut dyn FnMut(&[usize], f64, Duration),
        step_delay: Duration,
    ) {
        if self.state.phase().is_terminal() {
            on_finished(
                self.state.best_path(),
                self.state.best_cost(),
                self.state.elapsed(),
            );
            return;
        }
        self.state.begin_run();

        let n = self.problem.num_nodes();
        if n > 0 {
            log::debug!("backtracking over {n} nodes");
            let mut visited = vec![false; n];
            visited[0] = true;
            let mut path = Vec::with_capacity(n + 1);
            path.push(0);
            self.recurse(0, 1, 0.0, &mut path, &mut visited, on_improved, step_delay);
        }

        self.state.finish_run();
        log::debug!(
            "backtracking done: cost={}, elapsed={:?}",
            self.state.best_cost(),
            self.state.elapsed()
        );
        on_finished(
            self.state.best_path(),
            self.state.best_cost(),
            self.state.elapsed(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::UNREACHABLE;
    use crate::solver::Phase;

    fn three_nodes() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 4.0],
            vec![8.0, 4.0, 0.0],
        ])
    }

    /// Node 3 is only reachable from 2 and only exits to 0, forcing the
    /// unique cycle 0→1→2→3→0.
    fn forced_cycle() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 1.0, UNREACHABLE, UNREACHABLE],
            vec![UNREACHABLE, 0.0, 1.0, UNREACHABLE],
            vec![UNREACHABLE, UNREACHABLE, 0.0, 1.0],
            vec![1.0, UNREACHABLE, UNREACHABLE, 0.0],
        ])
    }

    #[test]
    fn test_three_node_optimum() {
        let matrix = three_nodes();
        let mut solver = BacktrackSolver::new(&matrix);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        assert_eq!(solver.best_cost(), 17.0);
        let path = solver.best_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], 0);
        assert_eq!(path[3], 0);
    }

    #[test]
    fn test_empty_instance_finishes_once() {
        let matrix = CostMatrix::new();
        let mut solver = BacktrackSolver::new(&matrix);
        let mut finishes = 0;
        solver.solve(
            &mut |_| {},
            &mut |path, cost, _| {
                finishes += 1;
                assert!(path.is_empty());
                assert_eq!(cost, UNREACHABLE);
            },
            Duration::ZERO,
        );
        assert_eq!(finishes, 1);
        assert_eq!(solver.state().phase(), Phase::Completed);
    }

    #[test]
    fn test_all_unreachable_reports_no_solution() {
        let u = UNREACHABLE;
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, u, u],
            vec![u, 0.0, u],
            vec![u, u, 0.0],
        ]);
        let mut solver = BacktrackSolver::new(&matrix);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        assert_eq!(solver.best_cost(), UNREACHABLE);
        assert!(solver.best_path().is_empty());
    }

    #[test]
    fn test_forced_asymmetric_cycle() {
        let matrix = forced_cycle();
        let mut solver = BacktrackSolver::new(&matrix);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        assert_eq!(solver.best_cost(), 4.0);
        assert_eq!(solver.best_path(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_unclosable_cycle_is_infeasible() {
        let mut matrix = forced_cycle();
        // Cut the only edge back to the start.
        let u = UNREACHABLE;
        matrix.set_matrix(vec![
            vec![0.0, 1.0, u, u],
            vec![u, 0.0, 1.0, u],
            vec![u, u, 0.0, 1.0],
            vec![u, u, u, 0.0],
        ]);
        let mut solver = BacktrackSolver::new(&matrix);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        assert_eq!(solver.best_cost(), UNREACHABLE);
        assert!(solver.best_path().is_empty());
    }

    #[test]
    fn test_improvements_strictly_decreasing() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ]);
        let mut solver = BacktrackSolver::new(&matrix);
        let mut costs = Vec::new();
        solver.solve(
            &mut |path| costs.push(matrix.path_cost(path)),
            &mut |_, _, _| {},
            Duration::ZERO,
        );
        assert!(!costs.is_empty());
        for pair in costs.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(*costs.last().unwrap(), solver.best_cost());
    }

    #[test]
    fn test_cancellation_stops_run() {
        let matrix = CostMatrix::from_rows(
            (0..9)
                .map(|i| (0..9).map(|j| if i == j { 0.0 } else { (i + j + 1) as f64 }).collect())
                .collect(),
        );
        let mut solver = BacktrackSolver::new(&matrix);
        let flag = solver.cancel_flag();
        let mut finishes = 0;
        solver.solve(
            // Cancelling from the first improvement is deterministic and
            // models a host thread flipping the shared flag mid-run.
            &mut |_| flag.cancel(),
            &mut |_, _, _| finishes += 1,
            Duration::ZERO,
        );
        assert_eq!(finishes, 1);
        assert_eq!(solver.state().phase(), Phase::Stopped);
        // Best-so-far state survives cancellation.
        assert!(solver.best_cost().is_finite());
        assert_eq!(solver.best_path().len(), 10);
    }

    #[test]
    fn test_terminal_instance_replays_finish() {
        let matrix = three_nodes();
        let mut solver = BacktrackSolver::new(&matrix);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        let evaluated = solver.cycles_evaluated();

        let mut replayed = None;
        solver.solve(
            &mut |_| panic!("terminal instance must not search again"),
            &mut |_, cost, _| replayed = Some(cost),
            Duration::ZERO,
        );
        assert_eq!(replayed, Some(17.0));
        assert_eq!(solver.cycles_evaluated(), evaluated);
    }
}

//! Branch-and-bound backtracking solver.
//!
//! # Algorithm
//!
//! Same recursive shape as [`BacktrackSolver`](super::BacktrackSolver),
//! with two cuts evaluated before a node's children are explored:
//!
//! 1. **Direct bound** — a partial tour already costing at least
//!    `best_cost` cannot improve; abandon it.
//! 2. **Lower bound** — `current_cost` plus the sum of each unvisited
//!    node's cheapest outgoing edge. Every remaining node must still be
//!    left through some outgoing edge, so the sum never overestimates the
//!    true completion cost and pruning on it preserves optimality.
//!
//! Children are visited in least-cost-first order, so cheap completions
//! are found early and tighten `best_cost` for later branches.
//!
//! # Complexity
//!
//! O((n-1)!) worst case, typically far less on instances with cost
//! structure the bound can exploit.

use std::time::Duration;

use crate::cost::{is_reachable, CostMatrix};
use crate::solver::{pace, SolverState, TspSolver};

/// Pruned depth-first TSP solver with least-cost-first ordering.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_engine::cost::CostMatrix;
/// use tsp_engine::exact::BranchBoundSolver;
/// use tsp_engine::solver::TspSolver;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
/// let mut solver = BranchBoundSolver::new(&matrix);
/// solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
/// assert_eq!(solver.best_cost(), 17.0);
/// ```
pub struct BranchBoundSolver<'a> {
    problem: &'a CostMatrix,
    state: SolverState,
    /// Cheapest positive finite outgoing edge per node, 0.0 when none exists.
    min_edge: Vec<f64>,
    cycles_evaluated: u64,
}

impl<'a> BranchBoundSolver<'a> {
    /// Binds a fresh solver to one problem instance.
    pub fn new(problem: &'a CostMatrix) -> Self {
        Self {
            problem,
            state: SolverState::new(),
            min_edge: Vec::new(),
            cycles_evaluated: 0,
        }
    }

    /// Number of complete cycles whose closing edge was evaluated.
    pub fn cycles_evaluated(&self) -> u64 {
        self.cycles_evaluated
    }

    /// Precomputes each node's cheapest outgoing edge, excluding zero and
    /// unreachable entries.
    fn compute_min_edges(&mut self) {
        let n = self.problem.num_nodes();
        self.min_edge = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| self.problem.cost(i, j))
                    .filter(|&c| c > 0.0 && c.is_finite())
                    .fold(f64::INFINITY, f64::min)
            })
            .map(|m| if m.is_finite() { m } else { 0.0 })
            .collect();
    }

    fn lower_bound(&self, current_cost: f64, visited: &[bool]) -> f64 {
        let remaining: f64 = visited
            .iter()
            .zip(&self.min_edge)
            .filter(|(&seen, _)| !seen)
            .map(|(_, &m)| m)
            .sum();
        current_cost + remaining
    }

    /// Unvisited, reachable successors of `current`, cheapest edge first.
    fn ordered_successors(&self, current: usize, visited: &[bool]) -> Vec<(usize, f64)> {
        let n = self.problem.num_nodes();
        let mut successors: Vec<(usize, f64)> = (0..n)
            .filter(|&next| !visited[next])
            .map(|next| (next, self.problem.cost(current, next)))
            .filter(|&(_, edge)| is_reachable(edge))
            .collect();
        successors.sort_by(|a, b| a.1.total_cmp(&b.1));
        successors
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
        if cost_so_far >= self.state.best_cost() {
            return;
        }
        if self.lower_bound(cost_so_far, visited) >= self.state.best_cost() {
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

        for (next, edge) in self.ordered_successors(current, visited) {
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

impl TspSolver for BranchBoundSolver<'_> {
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
            log::debug!("branch-and-bound over {n} nodes");
            self.compute_min_edges();
            let mut visited = vec![false; n];
            visited[0] = true;
            let mut path = Vec::with_capacity(n + 1);
            path.push(0);
            self.recurse(0, 1, 0.0, &mut path, &mut visited, on_improved, step_delay);
        }

        self.state.finish_run();
        log::debug!(
            "branch-and-bound done: cost={}, elapsed={:?}",
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

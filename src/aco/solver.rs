//! Ant colony solver.
//!
//! # Algorithm
//!
//! Each iteration, every ant builds a tour from node 0 by repeatedly
//! sampling the next unvisited, reachable node with probability
//! proportional to `pheromone(i,j)^α × heuristic(i,j)^β`, where the
//! heuristic is the reciprocal edge cost. Ants that get stuck, or whose
//! return edge to the start is unreachable, are discarded and deposit
//! nothing. After all ants act, every edge evaporates by `(1-ρ)` and each
//! successful ant deposits `Q / cost` along its directed edges.
//!
//! Tours always start at node 0: with a fixed seed this makes runs fully
//! reproducible, and it loses no generality since every cycle has a
//! rotation through node 0.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: A
//! Cooperative Learning Approach to the Traveling Salesman Problem",
//! *IEEE Transactions on Evolutionary Computation* 1(1), 53-66.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cost::{is_reachable, CostMatrix};
use crate::solver::{pace, SolverState, TspSolver};

use super::AcoConfig;

/// Keeps evaporation from extinguishing an edge entirely.
const PHEROMONE_FLOOR: f64 = 1e-10;

/// Ant Colony Optimization solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_engine::aco::{AcoConfig, AcoSolver};
/// use tsp_engine::cost::CostMatrix;
/// use tsp_engine::solver::TspSolver;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
/// let config = AcoConfig::default().with_seed(42);
/// let mut solver = AcoSolver::with_config(&matrix, config);
/// solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
/// assert_eq!(solver.best_cost(), 17.0); // only cycle cost on 3 nodes
/// ```
pub struct AcoSolver<'a> {
    problem: &'a CostMatrix,
    config: AcoConfig,
    state: SolverState,
    pheromone: Vec<f64>,
    heuristic: Vec<f64>,
    n: usize,
    rng: ChaCha8Rng,
}

impl<'a> AcoSolver<'a> {
    /// Binds a solver with default parameters to one problem instance.
    pub fn new(problem: &'a CostMatrix) -> Self {
        Self::with_config(problem, AcoConfig::default())
    }

    /// Binds a solver with explicit parameters to one problem instance.
    pub fn with_config(problem: &'a CostMatrix, config: AcoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            problem,
            config,
            state: SolverState::new(),
            pheromone: Vec::new(),
            heuristic: Vec::new(),
            n: 0,
            rng,
        }
    }

    /// Uniform pheromone, reciprocal-cost heuristic (0 for unreachable or
    /// zero-cost entries). Rebuilt at the start of every run.
    fn init_matrices(&mut self) {
        let n = self.problem.num_nodes();
        self.n = n;
        self.pheromone = vec![1.0; n * n];
        self.heuristic = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let cost = self.problem.cost(i, j);
                if cost.is_finite() && cost > 0.0 {
                    self.heuristic[i * n + j] = 1.0 / cost;
                }
            }
        }
    }

    /// Roulette-wheel pick of the next node among unvisited reachable
    /// candidates. `None` means the ant is stuck.
    fn select_next(&mut self, current: usize, visited: &[bool]) -> Option<usize> {
        let n = self.n;
        let mut weights = vec![0.0; n];
        let mut total = 0.0;

        for (j, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let heuristic = self.heuristic[current * n + j];
            if heuristic <= 0.0 {
                continue;
            }
            let weight = self.pheromone[current * n + j].powf(self.config.alpha)
                * heuristic.powf(self.config.beta);
            weights[j] = weight;
            total += weight;
        }

        // An all-zero (or overflowed) total means no viable move, not a
        // division-by-zero normalization.
        if !(total > 0.0) || !total.is_finite() {
            return None;
        }

        let r = self.rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut fallback = None;
        for (j, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            fallback = Some(j);
            if r <= cumulative {
                return Some(j);
            }
        }
        fallback
    }

    /// Builds one ant's closed tour. `None` discards the attempt.
    fn construct_tour(&mut self) -> Option<(Vec<usize>, f64)> {
        let n = self.n;
        let mut path = Vec::with_capacity(n + 1);
        path.push(0);
        let mut visited = vec![false; n];
        visited[0] = true;
        let mut cost = 0.0;

        for _ in 1..n {
            let current = path[path.len() - 1];
            let next = self.select_next(current, &visited)?;
            cost += self.problem.cost(current, next);
            visited[next] = true;
            path.push(next);
        }

        let closing = self.problem.cost(path[path.len() - 1], 0);
        if !is_reachable(closing) {
            return None;
        }
        path.push(0);
        Some((path, cost + closing))
    }

    /// Evaporates every edge, then deposits along each successful tour.
    fn update_pheromones(&mut self, tours: &[(Vec<usize>, f64)]) {
        let n = self.n;
        let keep = 1.0 - self.config.evaporation_rate;
        for p in &mut self.pheromone {
            *p = (*p * keep).max(PHEROMONE_FLOOR);
        }

        for (path, cost) in tours {
            if *cost <= 0.0 {
                continue;
            }
            let delta = self.config.q / cost;
            for pair in path.windows(2) {
                let (i, j) = (pair[0], pair[1]);
                self.pheromone[i * n + j] += delta;
                if self.config.symmetric_deposit {
                    self.pheromone[j * n + i] += delta;
                }
            }
        }
    }
}

impl TspSolver for AcoSolver<'_> {
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

        if self.problem.num_nodes() > 0 {
            self.init_matrices();
            log::debug!(
                "aco over {} nodes: {} ants, {} iterations",
                self.n,
                self.config.num_ants,
                self.config.max_iterations
            );

            for _ in 0..self.config.max_iterations {
                if self.state.is_cancelled() {
                    break;
                }

                let mut tours = Vec::with_capacity(self.config.num_ants);
                for _ in 0..self.config.num_ants {
                    if self.state.is_cancelled() {
                        break;
                    }
                    if let Some((path, cost)) = self.construct_tour() {
                        if cost < self.state.best_cost() {
                            self.state.record_best(&path, cost);
                            on_improved(&path);
                        }
                        tours.push((path, cost));
                    }
                }

                if !tours.is_empty() {
                    self.update_pheromones(&tours);
                }
                pace(step_delay);
            }
        }

        self.state.finish_run();
        log::debug!(
            "aco done: cost={}, elapsed={:?}",
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
    use crate::exact::BranchBoundSolver;
    use crate::solver::Phase;

    fn five_nodes() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 12.0, 10.0, 19.0, 8.0],
            vec![12.0, 0.0, 3.0, 7.0, 2.0],
            vec![10.0, 3.0, 0.0, 6.0, 20.0],
            vec![19.0, 7.0, 6.0, 0.0, 4.0],
            vec![8.0, 2.0, 20.0, 4.0, 0.0],
        ])
    }

    #[test]
    fn test_within_bounded_ratio_of_optimum() {
        let matrix = five_nodes();

        let mut exact = BranchBoundSolver::new(&matrix);
        exact.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        let optimum = exact.best_cost();

        let config = AcoConfig::default().with_seed(7);
        let mut aco = AcoSolver::with_config(&matrix, config);
        aco.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);

        assert!(aco.best_cost() >= optimum);
        assert!(aco.best_cost() <= optimum * 1.5);
        assert_eq!(aco.best_path().len(), 6);
        assert_eq!(aco.best_path()[0], 0);
        assert_eq!(aco.best_path()[5], 0);
    }

    #[test]
    fn test_seed_reproducibility() {
        let matrix = five_nodes();
        let run = || {
            let mut solver =
                AcoSolver::with_config(&matrix, AcoConfig::default().with_seed(123));
            solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
            (solver.best_path().to_vec(), solver.best_cost())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_instance_finishes_once() {
        let matrix = CostMatrix::new();
        let mut solver = AcoSolver::new(&matrix);
        let mut finishes = 0;
        solver.solve(&mut |_| {}, &mut |_, _, _| finishes += 1, Duration::ZERO);
        assert_eq!(finishes, 1);
        assert_eq!(solver.best_cost(), UNREACHABLE);
        assert_eq!(solver.state().phase(), Phase::Completed);
    }

    #[test]
    fn test_all_unreachable_discards_every_ant() {
        let u = UNREACHABLE;
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, u, u],
            vec![u, 0.0, u],
            vec![u, u, 0.0],
        ]);
        let mut solver = AcoSolver::with_config(&matrix, AcoConfig::default().with_seed(1));
        let mut finishes = 0;
        solver.solve(&mut |_| {}, &mut |_, _, _| finishes += 1, Duration::ZERO);
        assert_eq!(finishes, 1);
        assert_eq!(solver.best_cost(), UNREACHABLE);
        assert!(solver.best_path().is_empty());
    }

    #[test]
    fn test_symmetric_deposit_policy() {
        let matrix = five_nodes();
        assert!(matrix.is_symmetric(1e-10));
        let config = AcoConfig::default().with_seed(9).with_symmetric_deposit(true);
        let mut solver = AcoSolver::with_config(&matrix, config);
        solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
        assert!(solver.best_cost().is_finite());
    }

    #[test]
    fn test_improvements_strictly_decreasing() {
        let matrix = five_nodes();
        let mut solver = AcoSolver::with_config(&matrix, AcoConfig::default().with_seed(5));
        let mut costs = Vec::new();
        solver.solve(
            &mut |path| costs.push(matrix.path_cost(path)),
            &mut |_, _, _| {},
            Duration::ZERO,
        );
        for pair in costs.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }
}

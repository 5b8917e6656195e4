//! Bee colony solver.
//!
//! # Algorithm
//!
//! A population of candidate tours ("food sources") is refined in three
//! phases per iteration:
//!
//! - **Employed**: each source is perturbed by a random pairwise swap and
//!   greedily replaced when the perturbed tour costs less; failures bump
//!   the source's stagnation counter.
//! - **Onlooker**: sources are selected by roulette wheel in proportion to
//!   fitness `(max_cost + 1) − cost` and exploited the same way, one trial
//!   per colony member.
//! - **Scout**: sources stagnant for `max_trials` attempts are abandoned
//!   and replaced with fresh random permutations.
//!
//! Sources are stored as open permutations; their cost is the full cycle
//! cost including the closing edge, and the best tour is reported in the
//! closed `n+1` form shared by all solvers.
//!
//! # Reference
//!
//! Karaboga, D. & Basturk, B. (2007). "A powerful and efficient algorithm
//! for numerical function optimization: artificial bee colony (ABC)
//! algorithm", *Journal of Global Optimization* 39, 459-471.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cost::{is_reachable, CostMatrix, UNREACHABLE};
use crate::solver::{pace, SolverState, TspSolver};

use super::BcoConfig;

/// Bee Colony Optimization solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_engine::bco::{BcoConfig, BcoSolver};
/// use tsp_engine::cost::CostMatrix;
/// use tsp_engine::solver::TspSolver;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ]);
/// let mut solver = BcoSolver::with_config(&matrix, BcoConfig::default().with_seed(42));
/// solver.solve(&mut |_| {}, &mut |_, _, _| {}, Duration::ZERO);
/// assert_eq!(solver.best_cost(), 17.0); // only cycle cost on 3 nodes
/// ```
pub struct BcoSolver<'a> {
    problem: &'a CostMatrix,
    config: BcoConfig,
    state: SolverState,
    sources: Vec<Vec<usize>>,
    costs: Vec<f64>,
    trials: Vec<u32>,
    rng: ChaCha8Rng,
}

impl<'a> BcoSolver<'a> {
    /// Binds a solver with default parameters to one problem instance.
    pub fn new(problem: &'a CostMatrix) -> Self {
        Self::with_config(problem, BcoConfig::default())
    }

    /// Binds a solver with explicit parameters to one problem instance.
    pub fn with_config(problem: &'a CostMatrix, config: BcoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            problem,
            config,
            state: SolverState::new(),
            sources: Vec::new(),
            costs: Vec::new(),
            trials: Vec::new(),
            rng,
        }
    }

    /// Full cycle cost of an open permutation, closing edge included.
    fn tour_cost(&self, perm: &[usize]) -> f64 {
        let mut total = 0.0;
        for pair in perm.windows(2) {
            let segment = self.problem.cost(pair[0], pair[1]);
            if !is_reachable(segment) {
                return UNREACHABLE;
            }
            total += segment;
        }
        if perm.len() > 1 {
            let closing = self.problem.cost(perm[perm.len() - 1], perm[0]);
            if !is_reachable(closing) {
                return UNREACHABLE;
            }
            total += closing;
        }
        total
    }

    fn random_permutation(&mut self) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..self.problem.num_nodes()).collect();
        perm.shuffle(&mut self.rng);
        perm
    }

    /// Swaps two random positions; the identity for tours too short to swap.
    fn neighbor_swap(&mut self, perm: &[usize]) -> Vec<usize> {
        let mut neighbor = perm.to_vec();
        let n = neighbor.len();
        if n >= 2 {
            let a = self.rng.random_range(0..n);
            let mut b = self.rng.random_range(0..n - 1);
            if b >= a {
                b += 1;
            }
            neighbor.swap(a, b);
        }
        neighbor
    }

    fn record_if_best(&mut self, perm: &[usize], cost: f64, on_improved: &mut dyn FnMut(&[usize])) {
        if cost < self.state.best_cost() {
            let mut closed = perm.to_vec();
            if let Some(&start) = perm.first() {
                closed.push(start);
            }
            self.state.record_best(&closed, cost);
            on_improved(&closed);
        }
    }

    fn init_colony(&mut self, on_improved: &mut dyn FnMut(&[usize])) {
        self.sources = Vec::with_capacity(self.config.colony_size);
        self.costs = Vec::with_capacity(self.config.colony_size);
        self.trials = vec![0; self.config.colony_size];

        for _ in 0..self.config.colony_size {
            let perm = self.random_permutation();
            let cost = self.tour_cost(&perm);
            self.record_if_best(&perm, cost, on_improved);
            self.sources.push(perm);
            self.costs.push(cost);
        }
    }

    /// One perturb-and-greedily-replace trial on source `i`.
    fn exploit(&mut self, i: usize, on_improved: &mut dyn FnMut(&[usize])) {
        let current = self.sources[i].clone();
        let neighbor = self.neighbor_swap(&current);
        let cost = self.tour_cost(&neighbor);
        if cost < self.costs[i] {
            self.record_if_best(&neighbor, cost, on_improved);
            self.sources[i] = neighbor;
            self.costs[i] = cost;
            self.trials[i] = 0;
        } else {
            self.trials[i] += 1;
        }
    }

    fn employed_phase(&mut self, on_improved: &mut dyn FnMut(&[usize])) {
        for i in 0..self.config.colony_size {
            if self.state.is_cancelled() {
                return;
            }
            self.exploit(i, on_improved);
        }
    }

    fn onlooker_phase(&mut self, on_improved: &mut dyn FnMut(&[usize])) {
        let max_finite = self
            .costs
            .iter()
            .copied()
            .filter(|c| c.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        if !max_finite.is_finite() {
            // Every source is infeasible; selection is meaningless.
            return;
        }

        let fitness: Vec<f64> = self
            .costs
            .iter()
            .map(|&c| if c.is_finite() { (max_finite + 1.0) - c } else { 0.0 })
            .collect();
        let total: f64 = fitness.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return;
        }

        for _ in 0..self.config.colony_size {
            if self.state.is_cancelled() {
                return;
            }
            let r = self.rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            let mut selected = None;
            for (i, &f) in fitness.iter().enumerate() {
                if f <= 0.0 {
                    continue;
                }
                cumulative += f;
                selected = Some(i);
                if r <= cumulative {
                    break;
                }
            }
            if let Some(i) = selected {
                self.exploit(i, on_improved);
            }
        }
    }

    fn scout_phase(&mut self, on_improved: &mut dyn FnMut(&[usize])) {
        for i in 0..self.config.colony_size {
            if self.state.is_cancelled() {
                return;
            }
            if self.trials[i] < self.config.max_trials {
                continue;
            }
            let perm = self.random_permutation();
            let cost = self.tour_cost(&perm);
            self.record_if_best(&perm, cost, on_improved);
            self.sources[i] = perm;
            self.costs[i] = cost;
            self.trials[i] = 0;
        }
    }
}

impl TspSolver for BcoSolver<'_> {
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
            log::debug!(
                "bco over {} nodes: colony {}, {} iterations",
                self.problem.num_nodes(),
                self.config.colony_size,
                self.config.max_iterations
            );
            self.init_colony(on_improved);

            for _ in 0..self.config.max_iterations {
                if self.state.is_cancelled() {
                    break;
                }
                self.employed_phase(on_improved);
                self.onlooker_phase(on_improved);
                self.scout_phase(on_improved);
                pace(step_delay);
            }
        }

        self.state.finish_run();
        log::debug!(
            "bco done: cost={}, elapsed={:?}",
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

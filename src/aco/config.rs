//! Ant colony configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for [`AcoSolver`](super::AcoSolver).
///
/// # Examples
///
/// ```
/// use tsp_engine::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(40)
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.num_ants, 40);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration.
    pub num_ants: usize,
    /// Number of construct-and-reinforce iterations.
    pub max_iterations: usize,
    /// Pheromone influence exponent (α).
    pub alpha: f64,
    /// Heuristic (inverse distance) influence exponent (β).
    pub beta: f64,
    /// Per-iteration pheromone evaporation rate (ρ), in `0..1`.
    pub evaporation_rate: f64,
    /// Deposition constant (Q); each successful ant deposits `Q / cost`.
    pub q: f64,
    /// Deposit on the reverse edge as well. Only meaningful for symmetric
    /// instances; directed-only deposition is required for asymmetric ones.
    pub symmetric_deposit: bool,
    /// Random seed (`None` for OS entropy).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            symmetric_deposit: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone influence exponent (α).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent (β).
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate (ρ).
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposition constant (Q).
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Enables reverse-edge deposition for symmetric instances.
    pub fn with_symmetric_deposit(mut self, symmetric: bool) -> Self {
        self.symmetric_deposit = symmetric;
        self
    }

    /// Sets the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

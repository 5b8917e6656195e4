//! Bee colony configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for [`BcoSolver`](super::BcoSolver).
///
/// # Examples
///
/// ```
/// use tsp_engine::bco::BcoConfig;
///
/// let config = BcoConfig::default()
///     .with_colony_size(30)
///     .with_max_trials(5);
/// assert_eq!(config.colony_size, 30);
/// assert_eq!(config.max_trials, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BcoConfig {
    /// Number of food sources (and employed bees).
    pub colony_size: usize,
    /// Number of employed/onlooker/scout cycles.
    pub max_iterations: usize,
    /// Stagnation trials before a source is abandoned to a scout.
    pub max_trials: u32,
    /// Random seed (`None` for OS entropy).
    pub seed: Option<u64>,
}

impl Default for BcoConfig {
    fn default() -> Self {
        Self {
            colony_size: 20,
            max_iterations: 100,
            max_trials: 10,
            seed: None,
        }
    }
}

impl BcoConfig {
    /// Sets the number of food sources.
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation threshold that triggers a scout replacement.
    pub fn with_max_trials(mut self, trials: u32) -> Self {
        self.max_trials = trials;
        self
    }

    /// Sets the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

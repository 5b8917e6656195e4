//! Ant Colony Optimization.
//!
//! - [`AcoConfig`] — Colony parameters (ants, iterations, α/β/ρ/Q, seed)
//! - [`AcoSolver`] — Probabilistic tour construction with pheromone
//!   reinforcement

mod config;
mod solver;

pub use config::AcoConfig;
pub use solver::AcoSolver;

//! Bee Colony Optimization.
//!
//! - [`BcoConfig`] — Colony parameters (size, iterations, stagnation limit)
//! - [`BcoSolver`] — Employed/onlooker exploitation with scout-driven
//!   diversification over a population of candidate tours

mod config;
mod solver;

pub use config::BcoConfig;
pub use solver::BcoSolver;

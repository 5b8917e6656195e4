//! Directed cost matrix and derived cost queries.
//!
//! Provides the shared problem representation consumed by every solver.

mod matrix;

pub use matrix::{is_reachable, CostMatrix, UNREACHABLE};

//! Exact solvers.
//!
//! - [`BacktrackSolver`] — Unpruned exhaustive backtracking (slow baseline)
//! - [`BranchBoundSolver`] — Backtracking with lower-bound pruning and
//!   least-cost-first child ordering
//!
//! Both fix node 0 as the cycle start, which loses no generality: every
//! Hamiltonian cycle visits every node, so each cycle has a rotation
//! starting at 0.

mod backtrack;
mod branch_and_bound;

pub use backtrack::BacktrackSolver;
pub use branch_and_bound::BranchBoundSolver;

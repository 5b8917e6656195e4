//! # tsp-engine
//!
//! Solver engine for the (possibly asymmetric) Traveling Salesman Problem:
//! four interchangeable strategies over a shared directed cost matrix,
//! producing a minimum-cost Hamiltonian cycle.
//!
//! ## Modules
//!
//! - [`cost`] — Directed cost matrix and path cost queries
//! - [`solver`] — Solver contract (trait, state, cancellation, solver kinds)
//! - [`exact`] — Exact backtracking and branch-and-bound solvers
//! - [`aco`] — Ant Colony Optimization metaheuristic
//! - [`bco`] — Bee Colony Optimization metaheuristic
//! - [`benchmark`] — Comparative run harness over all solver kinds
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use tsp_engine::cost::CostMatrix;
//! use tsp_engine::exact::BranchBoundSolver;
//! use tsp_engine::solver::TspSolver;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0.0, 5.0, 8.0],
//!     vec![5.0, 0.0, 4.0],
//!     vec![8.0, 4.0, 0.0],
//! ]);
//!
//! let mut solver = BranchBoundSolver::new(&matrix);
//! let mut finished = None;
//! solver.solve(
//!     &mut |_improved| {},
//!     &mut |path, cost, _elapsed| finished = Some((path.to_vec(), cost)),
//!     Duration::ZERO,
//! );
//!
//! let (path, cost) = finished.expect("on_finished fires exactly once");
//! assert_eq!(cost, 17.0);
//! assert_eq!(path.len(), 4); // closed cycle: n + 1 nodes
//! ```

pub mod aco;
pub mod bco;
pub mod benchmark;
pub mod cost;
pub mod exact;
pub mod solver;

//! Shared solver contract.
//!
//! - [`TspSolver`] — The `solve` lifecycle every strategy implements
//! - [`SolverState`] — Best-path/best-cost/elapsed state with run phases
//! - [`CancelFlag`] — Cross-thread cooperative cancellation
//! - [`SolverKind`] — Strategy registry and boxed-solver factory

mod cancel;
mod contract;
mod kind;
mod state;

pub use cancel::CancelFlag;
pub use contract::{pace, TspSolver};
pub use kind::SolverKind;
pub use state::{Phase, SolverState};

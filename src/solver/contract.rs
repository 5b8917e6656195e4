//! The `solve` contract shared by every strategy.

use std::time::Duration;

use super::{CancelFlag, SolverState};

/// The lifecycle every TSP solving strategy implements.
///
/// A solver is bound to one problem instance at construction, runs one
/// `solve` call, and is then discarded; instances are not designed for
/// reuse across runs.
///
/// # Callbacks
///
/// - `on_improved(path)` fires synchronously whenever a strictly better
///   complete cycle is found. Across one run the reported costs are
///   strictly decreasing, delivered in discovery order.
/// - `on_finished(path, cost, elapsed)` fires exactly once, after the run
///   stops for any reason — natural completion or cancellation. Hosts
///   depend on this single firing to unlock their control state. Calling
///   `solve` again on an instance already in a terminal phase replays
///   `on_finished` with the existing state and does no further work.
///
/// A final cost of [`UNREACHABLE`](crate::cost::UNREACHABLE) with an empty
/// path means no Hamiltonian cycle exists under the given edges.
///
/// # Pacing
///
/// `step_delay` inserts a sleep at fine-grained points (each recursive
/// descent or iteration) purely so a visualization can keep up. It has no
/// effect on the result; pass [`Duration::ZERO`] to skip it entirely.
pub trait TspSolver {
    /// The solver's best-path/best-cost/elapsed state.
    fn state(&self) -> &SolverState;

    /// Runs the search to completion or cancellation.
    fn solve(
        &mut self,
        on_improved: &mut dyn FnMut(&[usize]),
        on_finished: &mut dyn FnMut(&[usize], f64, Duration),
        step_delay: Duration,
    );

    /// Best complete cycle found (ordered node list, closed form).
    fn best_path(&self) -> &[usize] {
        self.state().best_path()
    }

    /// Cost of the best cycle, [`UNREACHABLE`](crate::cost::UNREACHABLE)
    /// while none exists.
    fn best_cost(&self) -> f64 {
        self.state().best_cost()
    }

    /// Wall-clock duration of the finished run.
    fn elapsed(&self) -> Duration {
        self.state().elapsed()
    }

    /// Handle for requesting cancellation from another thread.
    fn cancel_flag(&self) -> CancelFlag {
        self.state().cancel_flag()
    }
}

/// Sleeps for `step_delay` unless it is zero.
pub fn pace(step_delay: Duration) {
    if !step_delay.is_zero() {
        std::thread::sleep(step_delay);
    }
}

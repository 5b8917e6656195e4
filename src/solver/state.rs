//! Per-run solver state.

use std::time::{Duration, Instant};

use crate::cost::UNREACHABLE;

use super::CancelFlag;

/// Run phase of a solver instance.
///
/// `Idle → Running → Stopped | Completed`; the two terminal phases are
/// never left within the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, `solve` not yet called.
    Idle,
    /// Inside `solve`.
    Running,
    /// Cancelled externally via the [`CancelFlag`].
    Stopped,
    /// Search space exhausted or iteration budget reached.
    Completed,
}

impl Phase {
    /// Returns `true` for [`Phase::Stopped`] and [`Phase::Completed`].
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Stopped | Phase::Completed)
    }
}

/// Best-so-far state owned by each solver instance.
///
/// `best_path` starts empty and `best_cost` at [`UNREACHABLE`]; both are
/// mutated only by the owning solver during its own `solve` call. A final
/// cost of `UNREACHABLE` after the run means "no valid cycle exists", not
/// an error. Cancellation has no rollback: whatever the state held when
/// the flag was observed is final.
#[derive(Debug)]
pub struct SolverState {
    best_path: Vec<usize>,
    best_cost: f64,
    elapsed: Duration,
    phase: Phase,
    cancel: CancelFlag,
    started_at: Option<Instant>,
}

impl Default for SolverState {
    fn default() -> Self {
        Self {
            best_path: Vec::new(),
            best_cost: UNREACHABLE,
            elapsed: Duration::ZERO,
            phase: Phase::Idle,
            cancel: CancelFlag::new(),
            started_at: None,
        }
    }
}

impl SolverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best complete cycle found so far (empty until one is found).
    pub fn best_path(&self) -> &[usize] {
        &self.best_path
    }

    /// Cost of the best cycle, [`UNREACHABLE`] while none exists.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Wall-clock duration of the run, set once when it finishes.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Handle the host keeps to request cancellation mid-run.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Returns `true` once the host has requested cancellation.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Marks the run started: re-arms the flag and starts the timer.
    pub(crate) fn begin_run(&mut self) {
        self.cancel.re_arm();
        self.phase = Phase::Running;
        self.started_at = Some(Instant::now());
    }

    /// Records a strictly better complete cycle.
    pub(crate) fn record_best(&mut self, path: &[usize], cost: f64) {
        self.best_path.clear();
        self.best_path.extend_from_slice(path);
        self.best_cost = cost;
    }

    /// Stops the timer and moves to the matching terminal phase.
    pub(crate) fn finish_run(&mut self) {
        self.elapsed = self
            .started_at
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);
        self.phase = if self.cancel.is_cancelled() {
            Phase::Stopped
        } else {
            Phase::Completed
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SolverState::new();
        assert!(state.best_path().is_empty());
        assert_eq!(state.best_cost(), UNREACHABLE);
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.phase().is_terminal());
    }

    #[test]
    fn test_run_lifecycle() {
        let mut state = SolverState::new();
        state.begin_run();
        assert_eq!(state.phase(), Phase::Running);
        state.record_best(&[0, 1, 0], 4.0);
        state.finish_run();
        assert_eq!(state.phase(), Phase::Completed);
        assert!(state.phase().is_terminal());
        assert_eq!(state.best_cost(), 4.0);
        assert_eq!(state.best_path(), &[0, 1, 0]);
    }

    #[test]
    fn test_cancelled_run_stops() {
        let mut state = SolverState::new();
        state.begin_run();
        state.cancel_flag().cancel();
        assert!(state.is_cancelled());
        state.finish_run();
        assert_eq!(state.phase(), Phase::Stopped);
    }
}

//! Cooperative cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag shared between a running solver and its host.
///
/// The host sets the flag from any thread; the solver polls it at fine
/// granularity (every recursive call, every ant/bee evaluation, every outer
/// iteration) and stops as soon as practical, leaving its best-so-far state
/// intact. Relaxed ordering suffices: the flag is a single boolean that is
/// observed, never combined, across threads.
///
/// # Examples
///
/// ```
/// use tsp_engine::solver::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let handle = flag.clone();
/// assert!(!flag.is_cancelled());
/// handle.cancel();
/// assert!(flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a new, un-cancelled flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the associated solver stop as soon as practical.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clears the flag at the start of a run.
    pub(crate) fn re_arm(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

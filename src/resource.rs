//! Cooperative cancellation.
//!
//! The saturation loop polls a shared flag between reduction attempts;
//! the host flips it from any thread to stop the solver at the next
//! safe point. Queues stay well-formed after a cancelled run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation handle.
///
/// Cloning yields a handle to the same flag, so the host can keep one
/// clone and hand another to the solver.
#[derive(Debug, Clone, Default)]
pub struct ResourceLimit {
    cancel: Arc<AtomicBool>,
}

impl ResourceLimit {
    /// Create a fresh, un-cancelled limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Has cancellation been requested?
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Clear the flag so the solver can be driven again.
    pub fn reset(&self) {
        self.cancel.store(false, Ordering::Relaxed);
    }
}

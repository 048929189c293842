//! Cancellable handle for self-rescheduling tasks
//!
//! The frame loop and the typing timer chain both re-arm themselves after
//! every run. The handle is how the owner stops that chain: once cancelled,
//! the next run is skipped and nothing is re-armed.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct TaskState {
    cancelled: Cell<bool>,
    /// Platform id of the pending callback (rAF or timeout id)
    pending: Cell<Option<i32>>,
    runs: Cell<u64>,
}

/// Shared handle to a scheduled task. Clones refer to the same task.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    state: Rc<TaskState>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one iteration unless cancelled. Returns whether the task should
    /// re-arm itself.
    pub fn run<F: FnOnce()>(&self, body: F) -> bool {
        self.state.pending.set(None);
        if self.is_cancelled() {
            return false;
        }
        body();
        self.state.runs.set(self.state.runs.get() + 1);
        !self.is_cancelled()
    }

    /// Record the platform id of the next pending callback
    pub fn set_pending(&self, id: i32) {
        self.state.pending.set(Some(id));
    }

    /// Stop the task. Returns the pending callback id, if any, so the
    /// platform can cancel it too.
    pub fn cancel(&self) -> Option<i32> {
        self.state.cancelled.set(true);
        self.state.pending.take()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    /// Completed iterations
    pub fn runs(&self) -> u64 {
        self.state.runs.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_until_cancelled() {
        let handle = TaskHandle::new();
        let mut count = 0;
        assert!(handle.run(|| count += 1));
        assert!(handle.run(|| count += 1));
        handle.cancel();
        assert!(!handle.run(|| count += 1));
        assert_eq!(count, 2);
        assert_eq!(handle.runs(), 2);
    }

    #[test]
    fn test_cancel_from_inside() {
        let handle = TaskHandle::new();
        let inner = handle.clone();
        assert!(!handle.run(|| {
            inner.cancel();
        }));
        assert_eq!(handle.runs(), 1);
    }

    #[test]
    fn test_cancel_returns_pending_id() {
        let handle = TaskHandle::new();
        handle.set_pending(17);
        assert_eq!(handle.cancel(), Some(17));
        assert_eq!(handle.cancel(), None);
    }

    #[test]
    fn test_pending_cleared_when_run() {
        let handle = TaskHandle::new();
        handle.set_pending(3);
        handle.run(|| {});
        assert_eq!(handle.cancel(), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Main-thread scheduling port.
//!
//! Every mutation of a bar view, the auto-hide timer and controller state
//! happens on the host's main (UI) thread. Controllers never own threads;
//! they post work through this trait.

use std::time::Duration;

/// A unit of work posted to the main thread.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a delayed task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Wraps a scheduler-specific id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the scheduler-specific id.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Port for the host's main-thread task queue.
///
/// # Contract
///
/// - `post` and `post_delayed` may be called from any thread.
/// - Tasks run one at a time, in posting order for tasks due at the same time.
/// - After `cancel` returns, the cancelled task does not start. Cancelling a
///   task that already ran (or an unknown handle) is a no-op.
pub trait MainThread: Send + Sync {
    /// Queues `task` to run on the main thread as soon as possible.
    fn post(&self, task: Task);

    /// Queues `task` to run on the main thread after `delay`.
    fn post_delayed(&self, delay: Duration, task: Task) -> TaskHandle;

    /// Cancels a delayed task that has not started yet.
    fn cancel(&self, handle: TaskHandle);
}

// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock main thread.

use crate::application::port::{MainThread, Task, TaskHandle};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

struct Delayed {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    immediate: VecDeque<Task>,
    delayed: Vec<Delayed>,
}

/// A [`MainThread`] that only runs tasks when told to.
///
/// Time is virtual: it starts at zero and moves only through
/// [`advance`](Self::advance). Tasks never run while the queue lock is held,
/// so a task may post further tasks.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<Queue>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of queued immediate tasks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock().immediate.len()
    }

    /// Number of delayed tasks not yet due or cancelled.
    #[must_use]
    pub fn delayed_count(&self) -> usize {
        self.lock().delayed.len()
    }

    /// Runs immediate tasks until the queue is empty, including tasks they
    /// post. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let Some(task) = self.lock().immediate.pop_front() else {
                return ran;
            };
            task();
            ran += 1;
        }
    }

    /// Moves the clock forward, running every task that falls due in order
    /// of due time (then posting order). Immediate tasks run first.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut ran = self.run_pending();
        loop {
            let next = {
                let mut queue = self.lock();
                let earliest = queue
                    .delayed
                    .iter()
                    .enumerate()
                    .filter(|(_, d)| d.due <= target)
                    .min_by_key(|(_, d)| (d.due, d.id))
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let delayed = queue.delayed.remove(index);
                    queue.now = delayed.due;
                    delayed.task
                })
            };
            let Some(task) = next else { break };
            task();
            ran += 1 + self.run_pending();
        }
        self.lock().now = target;
        ran
    }
}

impl MainThread for ManualScheduler {
    fn post(&self, task: Task) {
        self.lock().immediate.push_back(task);
    }

    fn post_delayed(&self, delay: Duration, task: Task) -> TaskHandle {
        let mut queue = self.lock();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.delayed.push(Delayed { id, due, task });
        TaskHandle::new(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        self.lock().delayed.retain(|d| d.id != handle.id());
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let queue = self.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &queue.now)
            .field("immediate", &queue.immediate.len())
            .field("delayed", &queue.delayed.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_in = Arc::clone(&log);
        let make = move |name: &'static str| -> Task {
            let log = Arc::clone(&log_in);
            Box::new(move || log.lock().unwrap().push(name))
        };
        (log, make)
    }

    #[test]
    fn immediate_tasks_wait_for_run_pending() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.post(task("a"));
        scheduler.post(task("b"));
        assert_eq!(scheduler.pending_count(), 2);
        assert!(log.lock().unwrap().is_empty());

        assert_eq!(scheduler.run_pending(), 2);
        assert_eq!(*log.lock().unwrap(), ["a", "b"]);
    }

    #[test]
    fn delayed_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.post_delayed(Duration::from_millis(30), task("late"));
        scheduler.post_delayed(Duration::from_millis(10), task("early"));
        scheduler.post_delayed(Duration::from_millis(10), task("early-2"));

        scheduler.advance(Duration::from_millis(9));
        assert!(log.lock().unwrap().is_empty());
        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.lock().unwrap(), ["early", "early-2", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(34));
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.post_delayed(Duration::from_millis(5), task("x"));
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.delayed_count(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn tasks_may_post_tasks() {
        let scheduler = Arc::new(ManualScheduler::new());
        let flag = Arc::new(Mutex::new(false));
        let inner_scheduler = Arc::clone(&scheduler);
        let inner_flag = Arc::clone(&flag);
        scheduler.post_delayed(
            Duration::from_millis(1),
            Box::new(move || {
                inner_scheduler.post(Box::new(move || *inner_flag.lock().unwrap() = true));
            }),
        );
        scheduler.advance(Duration::from_millis(1));
        assert!(*flag.lock().unwrap());
    }
}

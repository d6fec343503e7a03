// SPDX-License-Identifier: MPL-2.0
//! Tokio adapter implementing the [`MainThread`] port.
//!
//! A single [`MainLoop`] task drains an unbounded channel, so every posted
//! task runs on that one task in posting order. Delayed tasks sleep on their
//! own spawned task and join the channel when due.
//!
//! # Cancellation
//!
//! Each delayed task has a slot keyed by its handle. Cancelling removes the
//! slot and aborts the sleeper; a task that already reached the channel is
//! dropped by the loop because its slot is gone.
//!
//! # Example
//!
//! ```ignore
//! let (main, main_loop) = TokioMainThread::new(tokio::runtime::Handle::current());
//! tokio::spawn(main_loop.run());
//! let host = HeadlessHost::new().with_main_thread(main);
//! ```

use crate::application::port::{MainThread, Task, TaskHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

enum Job {
    Now(Task),
    Delayed(u64, Task),
}

enum Slot {
    Sleeping(JoinHandle<()>),
    Queued,
}

type Slots = Arc<Mutex<HashMap<u64, Slot>>>;

fn lock_slots(slots: &Slots) -> MutexGuard<'_, HashMap<u64, Slot>> {
    slots.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("main thread timer table poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

/// A [`MainThread`] backed by a tokio runtime.
pub struct TokioMainThread {
    runtime: Handle,
    jobs: UnboundedSender<Job>,
    slots: Slots,
    next_id: AtomicU64,
}

/// The task that runs posted work. Spawn [`run`](Self::run) once.
pub struct MainLoop {
    jobs: UnboundedReceiver<Job>,
    slots: Slots,
}

impl TokioMainThread {
    /// Creates the scheduler and its loop. Sleepers are spawned on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> (Arc<Self>, MainLoop) {
        let (jobs, receiver) = unbounded_channel();
        let slots: Slots = Arc::default();
        let main = Arc::new(Self {
            runtime,
            jobs,
            slots: Arc::clone(&slots),
            next_id: AtomicU64::new(0),
        });
        (
            main,
            MainLoop {
                jobs: receiver,
                slots,
            },
        )
    }

    /// Number of delayed tasks neither run nor cancelled.
    #[must_use]
    pub fn delayed_count(&self) -> usize {
        lock_slots(&self.slots).len()
    }

    fn send(&self, job: Job) {
        if self.jobs.send(job).is_err() {
            tracing::warn!("main loop stopped, dropping task");
        }
    }
}

impl MainThread for TokioMainThread {
    fn post(&self, task: Task) {
        self.send(Job::Now(task));
    }

    fn post_delayed(&self, delay: Duration, task: Task) -> TaskHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let jobs = self.jobs.clone();
        let slots = Arc::clone(&self.slots);

        // Held across the spawn so the sleeper cannot look up its slot
        // before it exists.
        let mut table = lock_slots(&self.slots);
        let sleeper = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut table = lock_slots(&slots);
            if let Some(slot) = table.get_mut(&id) {
                *slot = Slot::Queued;
                if jobs.send(Job::Delayed(id, task)).is_err() {
                    table.remove(&id);
                }
            }
        });
        table.insert(id, Slot::Sleeping(sleeper));
        TaskHandle::new(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        if let Some(Slot::Sleeping(sleeper)) = lock_slots(&self.slots).remove(&handle.id()) {
            sleeper.abort();
        }
    }
}

impl MainLoop {
    /// Runs tasks until every [`TokioMainThread`] handle is dropped.
    pub async fn run(mut self) {
        while let Some(job) = self.jobs.recv().await {
            match job {
                Job::Now(task) => task(),
                Job::Delayed(id, task) => {
                    let live = lock_slots(&self.slots).remove(&id).is_some();
                    if live {
                        task();
                    } else {
                        tracing::trace!(id, "dropping cancelled delayed task");
                    }
                }
            }
        }
        tracing::debug!("main loop finished");
    }
}

impl std::fmt::Debug for TokioMainThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioMainThread")
            .field("delayed", &self.delayed_count())
            .finish_non_exhaustive()
    }
}

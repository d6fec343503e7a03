// SPDX-License-Identifier: MPL-2.0
//! Single-slot auto-hide timer.
//!
//! The timer owns no thread. It posts one delayed callback to the host's
//! main thread and remembers its handle so a later schedule or an explicit
//! cancel can withdraw it. Each schedule is stamped with a ticket; a
//! callback whose ticket is no longer current is ignored, which covers
//! hosts that cannot withdraw a callback once it is already queued.

use crate::application::port::{MainThread, TaskHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    handle: TaskHandle,
    ticket: u64,
}

/// At most one outstanding auto-hide callback.
#[derive(Debug, Default)]
pub struct AutoHideTimer {
    pending: Option<Pending>,
    next_ticket: u64,
}

impl AutoHideTimer {
    /// Creates an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending callback, then schedules `callback` after `delay`.
    ///
    /// The callback receives its ticket and should pass it to
    /// [`claim`](Self::claim) before acting.
    pub fn schedule<F>(&mut self, main: &dyn MainThread, delay: Duration, callback: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel(main);
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let handle = main.post_delayed(delay, Box::new(move || callback(ticket)));
        tracing::trace!(ticket, delay_ms = delay.as_millis() as u64, "auto-hide scheduled");
        self.pending = Some(Pending { handle, ticket });
    }

    /// Cancels the pending callback. Returns true if one was pending.
    pub fn cancel(&mut self, main: &dyn MainThread) -> bool {
        match self.pending.take() {
            Some(pending) => {
                main.cancel(pending.handle);
                tracing::trace!(ticket = pending.ticket, "auto-hide cancelled");
                true
            }
            None => false,
        }
    }

    /// Marks the callback carrying `ticket` as fired.
    ///
    /// Returns false for a stale callback (cancelled or superseded), which
    /// must then do nothing.
    pub fn claim(&mut self, ticket: u64) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true while a callback is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of outstanding callbacks (0 or 1).
    #[must_use]
    pub fn outstanding(&self) -> usize {
        usize::from(self.pending.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::ManualScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting_timer() -> (Arc<Mutex<AutoHideTimer>>, Arc<AtomicUsize>) {
        (
            Arc::new(Mutex::new(AutoHideTimer::new())),
            Arc::new(AtomicUsize::new(0)),
        )
    }

    fn schedule(
        timer: &Arc<Mutex<AutoHideTimer>>,
        fired: &Arc<AtomicUsize>,
        main: &ManualScheduler,
        delay_ms: u64,
    ) {
        let timer_in_cb = Arc::clone(timer);
        let fired = Arc::clone(fired);
        timer.lock().unwrap().schedule(
            main,
            Duration::from_millis(delay_ms),
            move |ticket| {
                if timer_in_cb.lock().unwrap().claim(ticket) {
                    fired.fetch_add(1, Ordering::SeqCst);
                }
            },
        );
    }

    #[test]
    fn fires_once_after_delay() {
        let main = ManualScheduler::new();
        let (timer, fired) = counting_timer();
        schedule(&timer, &fired, &main, 100);

        main.advance(Duration::from_millis(99));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(timer.lock().unwrap().is_pending());

        main.advance(Duration::from_millis(1));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timer.lock().unwrap().is_pending());
    }

    #[test]
    fn reschedule_replaces_previous_callback() {
        let main = ManualScheduler::new();
        let (timer, fired) = counting_timer();
        schedule(&timer, &fired, &main, 100);
        main.advance(Duration::from_millis(50));
        schedule(&timer, &fired, &main, 100);

        assert_eq!(timer.lock().unwrap().outstanding(), 1);
        assert_eq!(main.delayed_count(), 1);

        main.advance(Duration::from_millis(60));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        main.advance(Duration::from_millis(40));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_prevents_firing() {
        let main = ManualScheduler::new();
        let (timer, fired) = counting_timer();
        schedule(&timer, &fired, &main, 10);

        assert!(timer.lock().unwrap().cancel(&main));
        assert!(!timer.lock().unwrap().cancel(&main));
        main.advance(Duration::from_millis(100));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut timer = AutoHideTimer::new();
        let main = ManualScheduler::new();
        timer.schedule(&main, Duration::from_millis(5), |_| {});
        timer.schedule(&main, Duration::from_millis(5), |_| {});
        assert!(!timer.claim(0));
        assert!(timer.claim(1));
        assert!(!timer.claim(1));
    }
}

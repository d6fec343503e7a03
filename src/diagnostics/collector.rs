// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! Controllers hold a [`DiagnosticsHandle`] and send events through a bounded
//! channel; the application owns the [`DiagnosticsCollector`] and drains the
//! channel into a circular buffer when convenient.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, UndoBarEvent};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel so recording never blocks the
/// main thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn record(&self, kind: UndoBarEvent) {
        if let Err(err) = self.try_record(kind) {
            tracing::trace!(event = err.into_inner().kind.name(), "diagnostics event dropped");
        }
    }

    /// Records an event, returning it back if the channel is full or closed.
    pub fn try_record(&self, kind: UndoBarEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Collects diagnostic events into a bounded buffer.
///
/// Oldest events are evicted when the buffer reaches capacity.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the stored events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the kinds of the stored events, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<UndoBarEvent> {
        self.buffer.iter().map(|e| e.kind.clone()).collect()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clears stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports the stored events as TOML (`[[events]]` tables).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_toml(&self) -> crate::error::Result<String> {
        #[derive(serde::Serialize)]
        struct Export {
            events: Vec<UndoBarEvent>,
        }
        let export = Export {
            events: self.kinds(),
        };
        Ok(toml::to_string(&export)?)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::undo_bar::Style;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.record(UndoBarEvent::TimedOut);
        handle.record(UndoBarEvent::Hidden { animated: true });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(
            collector.kinds(),
            vec![
                UndoBarEvent::TimedOut,
                UndoBarEvent::Hidden { animated: true }
            ]
        );
    }

    #[test]
    fn full_channel_drops_events() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.record(UndoBarEvent::TimedOut);
        }
        assert!(handle.try_record(UndoBarEvent::TimedOut).is_err());
    }

    #[test]
    fn buffer_evicts_oldest_when_full() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();

        for _ in 0..20 {
            handle.record(UndoBarEvent::TimedOut);
        }
        handle.record(UndoBarEvent::UndoPressed { has_token: true });
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        assert_eq!(
            collector.kinds().last(),
            Some(&UndoBarEvent::UndoPressed { has_token: true })
        );
    }

    #[test]
    fn export_toml_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().record(UndoBarEvent::ViewAttached {
            style: Style::Holo,
            reused: false,
        });
        collector.process_pending();

        let text = collector.export_toml().expect("export");
        assert!(text.contains("[[events]]"));
        assert!(text.contains("event = \"view_attached\""));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().record(UndoBarEvent::TimedOut);
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}

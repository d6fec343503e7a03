// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording undo bar lifecycle events.
//!
//! This module provides infrastructure for capturing what controllers do
//! (attach, show, hide, time out, undo) and storing it in a memory-bounded
//! circular buffer the application can inspect or export.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`UndoBarEvent`]: Enum representing the recorded lifecycle events
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Owner and cheap sender

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, UndoBarEvent};

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for undo bar lifecycle tracking.
//!
//! Events record what the controller did (attach, show, hide) and how each
//! presentation ended (timed out or undone) so an application can inspect
//! the recent history when something looks wrong.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::ui::undo_bar::Style;

/// Lifecycle events emitted by the undo bar controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UndoBarEvent {
    /// A bar view was bound to a window.
    ViewAttached {
        /// Style tag of the bound view.
        style: Style,
        /// True if an existing view with the same style was reused.
        reused: bool,
    },

    /// An existing view with a different style tag was removed.
    ViewReplaced {
        /// Style tag of the removed view (if it had one).
        #[serde(skip_serializing_if = "Option::is_none")]
        previous: Option<Style>,
        /// Style of the view taking its place.
        style: Style,
    },

    /// A presentation started.
    Shown {
        /// Resolved style used for rendering.
        style: Style,
        /// Whether the bar faded in.
        animated: bool,
        /// True when the toast fallback was used.
        toast: bool,
        /// Scheduled visible time.
        duration_ms: u32,
    },

    /// The bar was hidden.
    Hidden {
        /// Whether the bar faded out.
        animated: bool,
    },

    /// The auto-hide timer expired.
    TimedOut,

    /// The undo button was pressed.
    UndoPressed {
        /// Whether a token was attached to the presentation.
        has_token: bool,
    },
}

impl UndoBarEvent {
    /// Short stable name, used as the tracing field value.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewAttached { .. } => "view_attached",
            Self::ViewReplaced { .. } => "view_replaced",
            Self::Shown { .. } => "shown",
            Self::Hidden { .. } => "hidden",
            Self::TimedOut => "timed_out",
            Self::UndoPressed { .. } => "undo_pressed",
        }
    }
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// What happened.
    pub kind: UndoBarEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: UndoBarEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

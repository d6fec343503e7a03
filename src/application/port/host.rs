// SPDX-License-Identifier: MPL-2.0
//! Host surface port definition.
//!
//! The host surface is the environment an undo bar lives in: an optional
//! window with a view tree, a main-thread scheduler, a layout inflater and
//! an ephemeral toast channel used when no window is available.

use super::scheduler::MainThread;
use super::view::SharedBarView;
use crate::ui::undo_bar::style::Layout;
use std::fmt;
use std::sync::Arc;

/// A view-tree container able to hold the window's undo bar.
pub trait Container: Send + Sync {
    /// Finds the child carrying the `undoBar` identity.
    fn find_bar(&self) -> Option<SharedBarView>;

    /// Adds a bar as a child.
    fn add_bar(&self, view: SharedBarView);

    /// Removes a bar child. Removing a view that is not a child is a no-op.
    fn remove_bar(&self, view: &SharedBarView);

    /// Returns every bar child, oldest first.
    fn bars(&self) -> Vec<SharedBarView>;

    /// Returns the number of bar descendants.
    fn bar_count(&self) -> usize {
        self.bars().len()
    }
}

/// A host window.
pub trait Window: Send + Sync {
    /// The application content container, when the window has one.
    fn content_root(&self) -> Option<Arc<dyn Container>>;

    /// The outermost container of the window.
    fn decor_root(&self) -> Arc<dyn Container>;
}

/// Environment queries answered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Platform version used to resolve [`Style::Default`](crate::ui::undo_bar::Style::Default).
    pub api_level: u32,
    /// Whether the device is narrow enough for an edge-to-edge bottom bar.
    pub align_bottom_possible: bool,
}

/// How long the host keeps a toast on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLength {
    /// The host's short toast length.
    Short,
    /// The host's long toast length.
    Long,
}

/// Placement request for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// Anchored to the bottom edge without margins.
    Bottom,
}

/// An ephemeral, host-owned notification.
#[derive(Clone)]
pub struct Toast {
    /// The inflated view to display (button and divider hidden).
    pub view: SharedBarView,
    /// Host-side display length.
    pub length: ToastLength,
    /// Placement override.
    pub gravity: Option<Gravity>,
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("length", &self.length)
            .field("gravity", &self.gravity)
            .finish_non_exhaustive()
    }
}

/// Port for the environment hosting undo bars.
pub trait HostSurface: Send + Sync {
    /// The window to attach bars to, or `None` for a windowless context.
    fn window(&self) -> Option<Arc<dyn Window>>;

    /// The main-thread scheduler.
    fn main_thread(&self) -> Arc<dyn MainThread>;

    /// Inflates a fresh bar view from a layout template.
    fn inflate(&self, layout: &Layout) -> SharedBarView;

    /// Hands a toast to the host's toast channel.
    fn show_toast(&self, toast: Toast);

    /// Answers environment queries.
    fn environment(&self) -> HostEnvironment;

    /// Locale of the host, used for the default button label.
    fn locale(&self) -> Option<String> {
        None
    }
}

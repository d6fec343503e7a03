// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces a host toolkit implements so
//! the undo bar controller can run on it.
//!
//! # Available Ports
//!
//! - [`host`]: Host surface (window, view tree, toast channel, environment)
//! - [`scheduler`]: Main-thread task queue
//! - [`view`]: Bar view capabilities
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` where they are shared across threads
//! - No `async fn`: all timing goes through [`MainThread`]
//! - Nothing here returns errors; hosts degrade locally

pub mod host;
pub mod scheduler;
pub mod view;

// Re-export main types for convenience
pub use host::{Container, Gravity, HostEnvironment, HostSurface, Toast, ToastLength, Window};
pub use scheduler::{MainThread, Task, TaskHandle};
pub use view::{lock_view, BarView, ButtonHandler, SavedState, SharedBarView, Visibility};

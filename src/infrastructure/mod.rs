// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory host surface on a virtual clock (implements
//!   [`HostSurface`] and [`MainThread`])
//! - [`tokio_scheduler`]: Main thread on a tokio runtime (implements [`MainThread`])
//!
//! [`HostSurface`]: crate::application::port::HostSurface
//! [`MainThread`]: crate::application::port::MainThread

pub mod headless;
pub mod tokio_scheduler;

// Re-export main types for convenience
pub use headless::{HeadlessBarView, HeadlessHost, ManualScheduler};
pub use tokio_scheduler::{MainLoop, TokioMainThread};

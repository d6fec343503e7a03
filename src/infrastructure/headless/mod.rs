// SPDX-License-Identifier: MPL-2.0
//! In-memory host for tests and non-graphical front ends.
//!
//! # Design Notes
//!
//! - [`ManualScheduler`] runs main-thread work only when asked, on a virtual
//!   clock, so timing behavior is deterministic
//! - [`HeadlessBarView`] stores what a renderer would draw and logs calls
//! - [`HeadlessHost`] ties them to a [`HeadlessWindow`] and records toasts

mod host;
mod scheduler;
mod view;

pub use host::{HeadlessContainer, HeadlessHost, HeadlessWindow};
pub use scheduler::ManualScheduler;
pub use view::HeadlessBarView;

// SPDX-License-Identifier: MPL-2.0
//! `undo_bar` is a controller for dismissible "undo" notification bars.
//!
//! A bar shows a message and an undo button, hides itself after a timeout,
//! and reports to one listener whether the user undid the action or let it
//! expire. Hosts without a window get a plain toast instead. Rendering and
//! scheduling are delegated to host ports, with a headless host and a tokio
//! scheduler provided.

#![doc(html_root_url = "https://docs.rs/undo_bar/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

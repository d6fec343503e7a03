// SPDX-License-Identifier: MPL-2.0
//! Undo bar: a transient notification with an optional undo button.
//!
//! The bar shows a message on the left and an "UNDO" button on the right,
//! hides itself after a configurable duration, and reports the outcome to an
//! optional [`Listener`]: [`on_hide`](Listener::on_hide) on timeout,
//! [`on_undo`](Listener::on_undo) with the presentation's [`UndoToken`] on a
//! button press.
//!
//! Hosts without a window (or presentations without a button) fall back to
//! an ephemeral toast showing only the message.
//!
//! # Example
//!
//! ```no_run
//! use undo_bar::infrastructure::headless::HeadlessHost;
//! use undo_bar::ui::undo_bar::{Style, UndoBar, UndoToken};
//!
//! let host = HeadlessHost::new();
//! let bar = UndoBar::with_style(host.clone(), Style::Lollipop);
//! bar.set_message("Conversation archived");
//! bar.set_undo_token(UndoToken::new("thread-17"));
//! bar.show();
//! host.run_pending();
//! assert!(bar.is_visible());
//! ```

mod builder;
mod controller;
mod listener;
mod options;
pub mod style;
mod timer;
mod token;

pub use builder::Builder;
pub use controller::UndoBar;
pub use listener::{FnListener, Listener};
pub use options::Options;
pub use style::{Layout, Style, TextSizeTable};
pub use timer::AutoHideTimer;
pub use token::UndoToken;

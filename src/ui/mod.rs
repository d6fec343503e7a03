// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`undo_bar`] - Undo notification bar controller, builder and styles

pub mod undo_bar;

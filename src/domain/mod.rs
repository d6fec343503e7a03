// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`DisplayDuration`](ui::DisplayDuration),
//!   [`TextSize`](ui::TextSize), [`Color`](ui::Color), [`Margins`](ui::Margins))

pub mod ui;

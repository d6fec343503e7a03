// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the undo bar.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It resolves the locale used for the default button label.
//!
//! # Features
//!
//! - Locale resolution from an explicit request, the config file, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when translations are missing
//! - Process-wide cache of resolved undo labels

pub mod fluent;

pub use fluent::{undo_label_for, I18n, LabelCache};

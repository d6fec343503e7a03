// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display and animation durations
//! - **Platform**: Version thresholds for style resolution
//! - **Appearance**: Colors, margins and per-style text sizes
//! - **Labels**: Button label fallbacks
//! - **Diagnostics**: Event buffer capacity

use crate::domain::ui::newtypes::duration_bounds;
use crate::domain::ui::Color;
use crate::ui::undo_bar::style::TextSizeTable;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default total visible time of the bar (in milliseconds).
pub const DEFAULT_DURATION_MS: u32 = duration_bounds::DEFAULT_DISPLAY_MS;

/// Default show/hide transition time (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = duration_bounds::DEFAULT_ANIMATION_MS;

// ==========================================================================
// Platform Defaults
// ==========================================================================

/// First platform version rendering the flat style.
pub const LOLLIPOP_API_LEVEL: u32 = 21;

/// First platform version rendering the kitkat style.
pub const KITKAT_API_LEVEL: u32 = 19;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default undo button text color (flat style only).
pub const DEFAULT_UNDO_COLOR: Color = Color::WHITE;

/// Margin every style template starts with, on each side.
pub const STYLE_MARGIN_PX: u32 = 16;

/// Default extra bottom margin (non-flat styles only).
pub const DEFAULT_BOTTOM_MARGIN_PX: u32 = 0;

/// Preset text sizes of the holo template.
pub const HOLO_TEXT_SIZES: TextSizeTable = TextSizeTable {
    small: 13,
    normal: 15,
    medium: 17,
    large: 20,
};

/// Preset text sizes of the kitkat template.
pub const KITKAT_TEXT_SIZES: TextSizeTable = TextSizeTable {
    small: 13,
    normal: 15,
    medium: 17,
    large: 20,
};

/// Preset text sizes of the flat template.
pub const LOLLIPOP_TEXT_SIZES: TextSizeTable = TextSizeTable {
    small: 12,
    normal: 14,
    medium: 16,
    large: 20,
};

// ==========================================================================
// Label Defaults
// ==========================================================================

/// Button label used when the English locale is forced.
pub const ENGLISH_UNDO_LABEL: &str = "UNDO";

/// Fluent message id of the localized button label.
pub const UNDO_LABEL_KEY: &str = "undo-bar-button";

/// Locale used when nothing else resolves.
pub const FALLBACK_LOCALE: &str = "en-US";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in the diagnostics buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_thresholds_are_ordered() {
        assert!(KITKAT_API_LEVEL < LOLLIPOP_API_LEVEL);
    }

    #[test]
    fn text_size_presets_are_ordered() {
        for table in [HOLO_TEXT_SIZES, KITKAT_TEXT_SIZES, LOLLIPOP_TEXT_SIZES] {
            assert!(table.small < table.normal);
            assert!(table.normal < table.medium);
            assert!(table.medium < table.large);
        }
    }

    #[test]
    fn diagnostics_capacity_bounds_are_valid() {
        assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}

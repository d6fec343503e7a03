// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for the timing and sizing values
//! the undo bar is configured with.

use std::time::Duration;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Display and animation duration defaults (milliseconds).
pub mod duration_bounds {
    /// Default total visible time of the bar.
    pub const DEFAULT_DISPLAY_MS: u32 = 5000;
    /// Default show/hide transition time.
    pub const DEFAULT_ANIMATION_MS: u32 = 300;
    /// Display durations strictly above this use the long toast length.
    pub const LONG_TOAST_THRESHOLD_MS: u32 = DEFAULT_DISPLAY_MS;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// Total time the bar stays visible before the auto-hide fires.
///
/// Zero is a valid value: the auto-hide runs on the next scheduler turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(u32);

impl DisplayDuration {
    /// Creates a display duration from milliseconds.
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true when the host toast channel should use its long length.
    #[must_use]
    pub fn is_long(self) -> bool {
        self.0 > duration_bounds::LONG_TOAST_THRESHOLD_MS
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_DISPLAY_MS)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of the fade-in / fade-out transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationDuration(u32);

impl AnimationDuration {
    /// Creates an animation duration from milliseconds.
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_ANIMATION_MS)
    }
}

// =============================================================================
// TextSize
// =============================================================================

/// Raw sentinel values for the named text size presets.
pub mod text_size_sentinels {
    /// Large preset.
    pub const LARGE: i32 = -13;
    /// Medium preset.
    pub const MEDIUM: i32 = -12;
    /// Small preset.
    pub const SMALL: i32 = -11;
    /// The style's normal size.
    pub const NOTSET: i32 = -10;
}

/// Text size of the message and button.
///
/// Either an explicit pixel size or one of the named presets that resolve
/// against the style's size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    /// Explicit size in pixels (always positive).
    Pixels(u32),
    /// Large preset.
    Large,
    /// Medium preset.
    Medium,
    /// Small preset.
    Small,
    /// Normal size of the style.
    #[default]
    NotSet,
}

impl TextSize {
    /// Maps a raw value: positive values are pixels, the sentinels select a
    /// preset and any other non-positive value means [`TextSize::NotSet`].
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            px if px > 0 => Self::Pixels(px.unsigned_abs()),
            text_size_sentinels::LARGE => Self::Large,
            text_size_sentinels::MEDIUM => Self::Medium,
            text_size_sentinels::SMALL => Self::Small,
            _ => Self::NotSet,
        }
    }

    /// Returns the raw value (pixels or sentinel).
    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            Self::Pixels(px) => i32::try_from(px).unwrap_or(i32::MAX),
            Self::Large => text_size_sentinels::LARGE,
            Self::Medium => text_size_sentinels::MEDIUM,
            Self::Small => text_size_sentinels::SMALL,
            Self::NotSet => text_size_sentinels::NOTSET,
        }
    }

    /// Creates a pixel size. Zero collapses to [`TextSize::NotSet`].
    #[must_use]
    pub fn pixels(px: u32) -> Self {
        if px == 0 {
            Self::NotSet
        } else {
            Self::Pixels(px)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_duration_default_is_five_seconds() {
        assert_eq!(DisplayDuration::default().millis(), 5000);
        assert_eq!(
            DisplayDuration::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn display_duration_long_only_above_threshold() {
        assert!(!DisplayDuration::from_millis(5000).is_long());
        assert!(DisplayDuration::from_millis(5001).is_long());
        assert!(!DisplayDuration::from_millis(0).is_long());
    }

    #[test]
    fn display_duration_from_huge_duration_saturates() {
        let d = DisplayDuration::from(Duration::from_secs(u64::MAX / 2));
        assert_eq!(d.millis(), u32::MAX);
    }

    #[test]
    fn animation_duration_default() {
        assert_eq!(AnimationDuration::default().millis(), 300);
    }

    #[test]
    fn text_size_sentinels_map_to_presets() {
        assert_eq!(TextSize::from_raw(-13), TextSize::Large);
        assert_eq!(TextSize::from_raw(-12), TextSize::Medium);
        assert_eq!(TextSize::from_raw(-11), TextSize::Small);
        assert_eq!(TextSize::from_raw(-10), TextSize::NotSet);
        assert_eq!(TextSize::from_raw(0), TextSize::NotSet);
        assert_eq!(TextSize::from_raw(-99), TextSize::NotSet);
        assert_eq!(TextSize::from_raw(24), TextSize::Pixels(24));
    }

    #[test]
    fn text_size_raw_matches_sentinels() {
        assert_eq!(TextSize::Large.raw(), -13);
        assert_eq!(TextSize::NotSet.raw(), -10);
        assert_eq!(TextSize::Pixels(18).raw(), 18);
    }

    #[test]
    fn zero_pixels_is_not_set() {
        assert_eq!(TextSize::pixels(0), TextSize::NotSet);
        assert_eq!(TextSize::pixels(12), TextSize::Pixels(12));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Display options of an undo bar.
//!
//! Options whose default must not override the style's baked-in rendering
//! are `Option`s: `None` means "not customized", so a caller explicitly
//! setting a default-looking value (an empty label, a `-1` tint) is still
//! distinguishable from a caller that never touched the option.

use super::{Style, UndoToken};
use crate::config::defaults::{DEFAULT_BOTTOM_MARGIN_PX, DEFAULT_UNDO_COLOR};
use crate::config::Config;
use crate::domain::ui::{AnimationDuration, Color, DisplayDuration, Drawable, TextSize, Typeface};

/// The full option set of a presentation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Text on the left.
    pub message: Option<String>,
    /// Whether the undo button is offered. When false the toast path is used.
    pub button_visible: bool,
    /// Custom button label.
    pub button_label: Option<String>,
    /// Custom leading glyph of the button (ignored by the flat style).
    pub button_drawable: Option<Drawable>,
    /// Token handed back on undo.
    pub undo_token: Option<UndoToken>,
    /// Total visible time.
    pub duration: DisplayDuration,
    /// Show/hide transition time.
    pub animation_duration: AnimationDuration,
    /// Use the English "UNDO" instead of the localized label.
    pub use_english_locale: bool,
    /// Requested style; [`Style::Default`] resolves at show time.
    pub style: Style,
    /// Source-in tint over the style's background.
    pub background_tint: Option<Color>,
    /// Custom typeface for message and button.
    pub typeface: Option<Typeface>,
    /// Button text color (flat style only).
    pub undo_color: Color,
    /// Drop all margins (flat style on narrow devices only).
    pub align_parent_bottom: bool,
    /// Bottom margin in pixels (non-flat styles only).
    pub bottom_margin: u32,
    /// Text size of message and button.
    pub text_size: TextSize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            message: None,
            button_visible: true,
            button_label: None,
            button_drawable: None,
            undo_token: None,
            duration: DisplayDuration::default(),
            animation_duration: AnimationDuration::default(),
            use_english_locale: false,
            style: Style::Default,
            background_tint: None,
            typeface: None,
            undo_color: DEFAULT_UNDO_COLOR,
            align_parent_bottom: false,
            bottom_margin: DEFAULT_BOTTOM_MARGIN_PX,
            text_size: TextSize::NotSet,
        }
    }
}

impl Options {
    /// Defaults overridden by whatever the config file sets.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            style: config.style.unwrap_or_default(),
            duration: config.duration(),
            animation_duration: config.animation_duration(),
            use_english_locale: config.use_english_locale.unwrap_or(false),
            ..Self::default()
        }
    }

    /// The subset a windowless (toast-only) controller honors.
    ///
    /// The button is forced off; label, glyph, token, colors and margins
    /// make no sense without a bar to put them on.
    #[must_use]
    pub fn toast_subset(&self) -> Self {
        Self {
            message: self.message.clone(),
            button_visible: false,
            typeface: self.typeface.clone(),
            duration: self.duration,
            background_tint: self.background_tint,
            align_parent_bottom: self.align_parent_bottom,
            text_size: self.text_size,
            style: self.style,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert!(options.button_visible);
        assert_eq!(options.duration.millis(), 5000);
        assert_eq!(options.animation_duration.millis(), 300);
        assert_eq!(options.undo_color, Color::WHITE);
        assert_eq!(options.style, Style::Default);
        assert_eq!(options.text_size, TextSize::NotSet);
        assert!(options.button_label.is_none());
        assert!(options.background_tint.is_none());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = Config {
            language: None,
            style: Some(Style::KitKat),
            duration_ms: Some(7000),
            animation_duration_ms: None,
            use_english_locale: Some(true),
        };
        let options = Options::from_config(&config);
        assert_eq!(options.style, Style::KitKat);
        assert_eq!(options.duration.millis(), 7000);
        assert_eq!(options.animation_duration.millis(), 300);
        assert!(options.use_english_locale);
    }

    #[test]
    fn toast_subset_drops_interactive_options() {
        let options = Options {
            message: Some("Deleted".into()),
            button_label: Some("RESTORE".into()),
            undo_token: Some(UndoToken::new(1_u8)),
            background_tint: Some(Color::BLACK),
            bottom_margin: 40,
            duration: DisplayDuration::from_millis(9000),
            ..Options::default()
        };
        let subset = options.toast_subset();
        assert!(!subset.button_visible);
        assert_eq!(subset.message.as_deref(), Some("Deleted"));
        assert_eq!(subset.background_tint, Some(Color::BLACK));
        assert_eq!(subset.duration.millis(), 9000);
        assert!(subset.button_label.is_none());
        assert!(subset.undo_token.is_none());
        assert_eq!(subset.bottom_margin, 0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Visual style variants and their layout templates.
//!
//! [`Style::Default`] is a sentinel: it is resolved against the host's
//! platform version every time the bar is shown, never when options are set.

use crate::config::defaults::{
    HOLO_TEXT_SIZES, KITKAT_API_LEVEL, KITKAT_TEXT_SIZES, LOLLIPOP_API_LEVEL,
    LOLLIPOP_TEXT_SIZES, STYLE_MARGIN_PX,
};
use crate::domain::ui::{Margins, TextSize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known identities of the children every layout template provides.
pub mod ids {
    /// Root of the bar.
    pub const UNDO_BAR: &str = "undoBar";
    /// Message text on the left.
    pub const MESSAGE: &str = "message";
    /// Undo button on the right.
    pub const BUTTON: &str = "button";
    /// Separator between message and button (not every style has one).
    pub const DIVIDER: &str = "divider";
}

/// Visual variant of the undo bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// The style matching the host's platform version.
    #[default]
    Default,
    /// Dark translucent bar with divider (platform < 19).
    Holo,
    /// Light bar with divider (platform 19 and 20).
    KitKat,
    /// Flat full-width snackbar (platform >= 21).
    Lollipop,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Style; 4] = [Style::Default, Style::Holo, Style::KitKat, Style::Lollipop];

    /// Resolves [`Style::Default`] to a concrete style for the given
    /// platform version. Concrete styles resolve to themselves.
    #[must_use]
    pub fn resolve(self, api_level: u32) -> Style {
        match self {
            Style::Default if api_level >= LOLLIPOP_API_LEVEL => Style::Lollipop,
            Style::Default if api_level < KITKAT_API_LEVEL => Style::Holo,
            Style::Default => Style::KitKat,
            concrete => concrete,
        }
    }

    /// Returns true if this style renders with the flat conventions.
    #[must_use]
    pub fn is_lollipop(self, api_level: u32) -> bool {
        self.resolve(api_level) == Style::Lollipop
    }

    /// Name of the layout template this style inflates.
    #[must_use]
    pub fn layout_name(self) -> &'static str {
        match self {
            Style::Default => "undo_bar",
            Style::Holo => "undo_bar_holo",
            Style::KitKat => "undo_bar_kitkat",
            Style::Lollipop => "undo_bar_lollipop",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Default => "default",
            Style::Holo => "holo",
            Style::KitKat => "kitkat",
            Style::Lollipop => "lollipop",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Text size table
// =============================================================================

/// Pixel sizes a style uses for the named text size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSizeTable {
    /// Small preset.
    pub small: u32,
    /// Normal size (used when nothing is set).
    pub normal: u32,
    /// Medium preset.
    pub medium: u32,
    /// Large preset.
    pub large: u32,
}

impl TextSizeTable {
    /// Resolves a text size to pixels.
    #[must_use]
    pub fn resolve(&self, size: TextSize) -> u32 {
        match size {
            TextSize::Pixels(px) => px,
            TextSize::Large => self.large,
            TextSize::Medium => self.medium,
            TextSize::Small => self.small,
            TextSize::NotSet => self.normal,
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A layout template a host inflates into a bar view.
///
/// The template name follows the requested style (so a window can tell which
/// style an existing bar was inflated for) while the rendering conventions
/// follow the resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Style the template was requested for (becomes the view's style tag).
    pub style: Style,
    /// Style whose conventions the template renders with.
    pub resolved: Style,
    /// Template name.
    pub name: &'static str,
    /// Background resource baked into the template.
    pub background: &'static str,
    /// Whether the template contains a divider child.
    pub has_divider: bool,
    /// Margins the template starts with.
    pub margins: Margins,
    /// Preset text sizes.
    pub text_sizes: TextSizeTable,
}

impl Layout {
    /// Template for `style` on a host running `api_level`.
    #[must_use]
    pub fn for_style(style: Style, api_level: u32) -> Self {
        let resolved = style.resolve(api_level);
        let (background, has_divider, margins, text_sizes) = match resolved {
            Style::Holo => (
                "undo_bar_bg_holo",
                true,
                Margins::uniform(STYLE_MARGIN_PX),
                HOLO_TEXT_SIZES,
            ),
            Style::Lollipop => (
                "undo_bar_bg_lollipop",
                false,
                Margins::uniform(STYLE_MARGIN_PX),
                LOLLIPOP_TEXT_SIZES,
            ),
            Style::KitKat | Style::Default => (
                "undo_bar_bg_kitkat",
                true,
                Margins::uniform(STYLE_MARGIN_PX),
                KITKAT_TEXT_SIZES,
            ),
        };
        Self {
            style,
            resolved,
            name: style.layout_name(),
            background,
            has_divider,
            margins,
            text_sizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_by_platform_version() {
        assert_eq!(Style::Default.resolve(21), Style::Lollipop);
        assert_eq!(Style::Default.resolve(30), Style::Lollipop);
        assert_eq!(Style::Default.resolve(20), Style::KitKat);
        assert_eq!(Style::Default.resolve(19), Style::KitKat);
        assert_eq!(Style::Default.resolve(18), Style::Holo);
        assert_eq!(Style::Default.resolve(10), Style::Holo);
        assert!(Style::Default.is_lollipop(21));
        assert!(!Style::Default.is_lollipop(20));
        assert!(!Style::KitKat.is_lollipop(30));
    }

    #[test]
    fn concrete_styles_ignore_platform_version() {
        for api in [10, 19, 21, 34] {
            assert_eq!(Style::Holo.resolve(api), Style::Holo);
            assert_eq!(Style::KitKat.resolve(api), Style::KitKat);
            assert_eq!(Style::Lollipop.resolve(api), Style::Lollipop);
        }
    }

    #[test]
    fn lollipop_layout_has_no_divider() {
        assert!(!Layout::for_style(Style::Lollipop, 15).has_divider);
        assert!(Layout::for_style(Style::Holo, 30).has_divider);
        assert!(!Layout::for_style(Style::Default, 21).has_divider);
    }

    #[test]
    fn default_layout_keeps_default_tag() {
        let layout = Layout::for_style(Style::Default, 19);
        assert_eq!(layout.style, Style::Default);
        assert_eq!(layout.resolved, Style::KitKat);
        assert_eq!(layout.name, "undo_bar");
    }

    #[test]
    fn text_size_table_resolves_presets() {
        let table = TextSizeTable {
            small: 1,
            normal: 2,
            medium: 3,
            large: 4,
        };
        assert_eq!(table.resolve(TextSize::Small), 1);
        assert_eq!(table.resolve(TextSize::NotSet), 2);
        assert_eq!(table.resolve(TextSize::Medium), 3);
        assert_eq!(table.resolve(TextSize::Large), 4);
        assert_eq!(table.resolve(TextSize::Pixels(40)), 40);
    }

    #[test]
    fn style_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            style: Style,
        }
        let text = toml::to_string(&Wrapper {
            style: Style::KitKat,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "style = \"kitkat\"");
        let back: Wrapper = toml::from_str("style = \"lollipop\"").expect("deserialize");
        assert_eq!(back.style, Style::Lollipop);
    }
}

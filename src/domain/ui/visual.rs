// SPDX-License-Identifier: MPL-2.0
//! Framework-independent visual values handed to bar views.
//!
//! These carry what the controller decides; how they are drawn is up to the
//! host's renderer.

// =============================================================================
// Color
// =============================================================================

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque white, the default undo button text color.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0);

    /// Creates a color from a packed ARGB value.
    #[must_use]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates a color from its components.
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Returns the packed ARGB value.
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the alpha component.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

// =============================================================================
// Background
// =============================================================================

/// Porter-Duff mode used when tinting a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Keep the destination shape, replace its color with the source.
    #[default]
    SrcIn,
}

/// A color filter composited over a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorFilter {
    /// Filter color.
    pub color: Color,
    /// Composite mode.
    pub mode: BlendMode,
}

impl ColorFilter {
    /// Source-in tint with the given color.
    #[must_use]
    pub fn src_in(color: Color) -> Self {
        Self {
            color,
            mode: BlendMode::SrcIn,
        }
    }
}

/// The background drawable of a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Background {
    /// Resource the style bakes in (e.g. `undo_bar_bg_holo`).
    pub resource: String,
    /// Optional tint composited over the resource.
    pub color_filter: Option<ColorFilter>,
}

impl Background {
    /// Creates an untinted background from a resource name.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            color_filter: None,
        }
    }

    /// Returns this background with a source-in tint applied.
    #[must_use]
    pub fn tinted(mut self, color: Color) -> Self {
        self.color_filter = Some(ColorFilter::src_in(color));
        self
    }
}

// =============================================================================
// Typeface / Drawable
// =============================================================================

/// A font selection for the message and button text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Typeface {
    /// Font family name.
    pub family: String,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl Typeface {
    /// Regular weight of the given family.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: false,
            italic: false,
        }
    }

    /// Bold variant.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Italic variant.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Opaque reference to a drawable resource (e.g. the undo glyph).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Drawable(String);

impl Drawable {
    /// Creates a drawable reference.
    pub fn new(resource: impl Into<String>) -> Self {
        Self(resource.into())
    }

    /// Returns the resource name.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Layout margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    /// Left margin.
    pub left: u32,
    /// Top margin.
    pub top: u32,
    /// Right margin.
    pub right: u32,
    /// Bottom margin.
    pub bottom: u32,
}

impl Margins {
    /// No margins at all.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Same margin on every side.
    #[must_use]
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    /// Returns a copy with the bottom margin replaced.
    #[must_use]
    pub const fn with_bottom(mut self, bottom: u32) -> Self {
        self.bottom = bottom;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components_pack_as_argb() {
        let green = Color::from_argb(0xFF, 0x00, 0xFF, 0x00);
        assert_eq!(green.argb(), 0xFF00_FF00);
        assert_eq!(green.alpha(), 0xFF);
        assert_eq!(Color::TRANSPARENT.alpha(), 0);
    }

    #[test]
    fn tinted_background_uses_src_in() {
        let bg = Background::new("undo_bar_bg").tinted(Color::BLACK);
        assert_eq!(bg.resource, "undo_bar_bg");
        assert_eq!(
            bg.color_filter,
            Some(ColorFilter {
                color: Color::BLACK,
                mode: BlendMode::SrcIn
            })
        );
    }

    #[test]
    fn margins_with_bottom_keeps_other_sides() {
        let m = Margins::uniform(8).with_bottom(32);
        assert_eq!(m.left, 8);
        assert_eq!(m.top, 8);
        assert_eq!(m.right, 8);
        assert_eq!(m.bottom, 32);
    }
}

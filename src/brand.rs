//! Brand constants shared by every rendering component.
//!
//! Canvas size, palette and font names live here and nowhere else; templates, the static
//! background, the overlay renderer and the compositor all read from [`BRAND`].

use crate::foundation::core::{Canvas, Color};

/// Fixed brand colour palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Primary brand green (bottom bar, comparison left panel, trust shield).
    pub primary: Color,
    /// Lighter accent green (subtext, feature pill, shield border).
    pub accent: Color,
    /// Neon green highlight.
    pub neon: Color,
    /// Near-black background.
    pub dark: Color,
    /// Urgency red (speed badge, conversion bar, comparison divider).
    pub red: Color,
    /// White.
    pub white: Color,
    /// Light gray for secondary copy.
    pub light_gray: Color,
}

/// Font family names of the two display weights.
///
/// Written into the overlay SVG for readability. The
/// [`OverlayRenderer`](crate::OverlayRenderer) resolves faces by weight, so these names
/// never select a system font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandFonts {
    /// Family of the bold weight (labels, subtext).
    pub bold: &'static str,
    /// Family of the black weight (headlines, metrics).
    pub black: &'static str,
}

/// Process-wide immutable brand configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandConstants {
    /// Thumbnail canvas.
    pub canvas: Canvas,
    /// Colour palette.
    pub palette: Palette,
    /// Font family names.
    pub fonts: BrandFonts,
    /// Wordmark rendered in the bottom bar.
    pub wordmark: &'static str,
    /// Site label rendered next to the wordmark.
    pub site_label: &'static str,
}

/// The brand.
pub const BRAND: BrandConstants = BrandConstants {
    canvas: Canvas {
        width: 1280,
        height: 720,
    },
    palette: Palette {
        primary: Color::hex(0x16A34A),
        accent: Color::hex(0x4ADE80),
        neon: Color::hex(0x39FF14),
        dark: Color::hex(0x0A0F0D),
        red: Color::hex(0xDC2626),
        white: Color::hex(0xFFFFFF),
        light_gray: Color::hex(0xD1D5DB),
    },
    fonts: BrandFonts {
        bold: "DejaVu Sans Condensed",
        black: "DejaVu Sans",
    },
    wordmark: "QUOTELY",
    site_label: "quotely.ai",
};

#[cfg(test)]
#[path = "../tests/unit/brand/brand.rs"]
mod tests;

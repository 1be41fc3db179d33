use std::borrow::Cow;

use crate::assets::fonts::FontAssets;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::scene::{FontWeight, TextStyle};

/// Measured extent of a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TextExtent {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// Font context holding exactly one registered font file.
struct WeightContext {
    font_ctx: parley::FontContext,
    family: String,
}

impl WeightContext {
    fn new(bytes: &[u8]) -> ThumbResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ThumbError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ThumbError::font("registered font family has no name"))?
            .to_string();
        Ok(Self { font_ctx, family })
    }
}

/// Single-line text measurement against the two display fonts.
///
/// Each weight gets its own font context so a family name shared by both files can never
/// resolve to the wrong face. No system fonts are consulted.
pub(crate) struct TextMeasurer {
    bold: WeightContext,
    black: WeightContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl TextMeasurer {
    pub(crate) fn new(fonts: &FontAssets) -> ThumbResult<Self> {
        let bold = WeightContext::new(fonts.bytes(FontWeight::Bold))?;
        let black = WeightContext::new(fonts.bytes(FontWeight::Black))?;
        tracing::debug!(
            bold_family = %bold.family,
            black_family = %black.family,
            "registered measurement fonts"
        );
        Ok(Self {
            bold,
            black,
            layout_ctx: parley::LayoutContext::new(),
        })
    }

    fn family(&self, weight: FontWeight) -> &str {
        match weight {
            FontWeight::Bold => &self.bold.family,
            FontWeight::Black => &self.black.family,
        }
    }

    /// Unwrapped extent of `text`; letter spacing is added once per character.
    pub(crate) fn measure(&mut self, text: &str, style: &TextStyle) -> ThumbResult<TextExtent> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(ThumbError::layout("text size must be finite and > 0"));
        }
        if text.is_empty() {
            return Ok(TextExtent::default());
        }

        let family = self.family(style.weight).to_string();
        let ctx = match style.weight {
            FontWeight::Bold => &mut self.bold,
            FontWeight::Black => &mut self.black,
        };
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut ctx.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let chars = text.chars().count() as f32;
        Ok(TextExtent {
            width: layout.width() + style.letter_spacing * chars,
            height: layout.height(),
        })
    }

    /// Measure `text`, shrinking size and spacing proportionally until it fits
    /// `style.max_width`. Returns the style actually used.
    pub(crate) fn fit(
        &mut self,
        text: &str,
        style: &TextStyle,
    ) -> ThumbResult<(TextStyle, TextExtent)> {
        let mut fitted = *style;
        let mut extent = self.measure(text, &fitted)?;
        let Some(max) = style.max_width.filter(|m| m.is_finite() && *m > 0.0) else {
            return Ok((fitted, extent));
        };

        for _ in 0..FIT_ATTEMPTS {
            if extent.width <= max {
                break;
            }
            let scale = max / extent.width;
            fitted.size *= scale;
            fitted.letter_spacing *= scale;
            extent = self.measure(text, &fitted)?;
        }
        if extent.width > max {
            tracing::debug!(text, width = extent.width, max, "text still wider than its limit");
        }
        Ok((fitted, extent))
    }
}

/// Shaping is not exactly linear in size, so fitting re-measures a few times.
const FIT_ATTEMPTS: usize = 4;

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;

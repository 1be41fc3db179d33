use crate::assets::decode::encode_png;
use crate::assets::svg_raster::{parse_svg, rasterize_to_rgba};
use crate::brand::BRAND;
use crate::foundation::core::Canvas;
use crate::foundation::error::ThumbResult;

/// Static background document: diagonal dark -> brand green -> dark gradient with a soft
/// neon highlight towards the upper right.
pub(crate) fn static_background_svg(canvas: Canvas) -> String {
    let p = BRAND.palette;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs>
<linearGradient id="base" x1="0" y1="0" x2="1" y2="1">
<stop offset="0" stop-color="{dark}"/>
<stop offset="0.5" stop-color="{primary}"/>
<stop offset="1" stop-color="{dark}"/>
</linearGradient>
<radialGradient id="glow" cx="0.7" cy="0.35" r="0.55">
<stop offset="0" stop-color="{neon}" stop-opacity="0.22"/>
<stop offset="0.6" stop-color="{accent}" stop-opacity="0.06"/>
<stop offset="1" stop-color="{accent}" stop-opacity="0"/>
</radialGradient>
</defs>
<rect width="{w}" height="{h}" fill="url(#base)"/>
<rect width="{w}" height="{h}" fill="url(#glow)"/>
</svg>"#,
        w = canvas.width,
        h = canvas.height,
        dark = p.dark.svg_rgb(),
        primary = p.primary.svg_rgb(),
        neon = p.neon.svg_rgb(),
        accent = p.accent.svg_rgb(),
    )
}

/// Render the static background to a canvas-sized PNG.
///
/// Draws only gradients, so no fonts or network access are involved.
pub fn static_background(canvas: Canvas) -> ThumbResult<Vec<u8>> {
    let svg = static_background_svg(canvas);
    let tree = parse_svg(&svg, &usvg::Options::default())?;
    encode_png(&rasterize_to_rgba(&tree, canvas)?)
}

#[cfg(test)]
#[path = "../../tests/unit/background/fallback.rs"]
mod tests;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::foundation::math::demultiply;

/// Parse an SVG document with the given options.
pub(crate) fn parse_svg(svg: &str, opts: &usvg::Options<'_>) -> ThumbResult<usvg::Tree> {
    let tree = usvg::Tree::from_str(svg, opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize `tree` onto a transparent canvas-sized pixmap, scaled to fit the canvas width.
///
/// Returns straight-alpha RGBA8.
pub(crate) fn rasterize_to_rgba(tree: &usvg::Tree, canvas: Canvas) -> ThumbResult<RgbaImage> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| ThumbError::render("failed to allocate svg pixmap"))?;

    let tree_w = tree.size().width();
    if !tree_w.is_finite() || tree_w <= 0.0 {
        return Err(ThumbError::render("svg has invalid width"));
    }
    let scale = canvas.width_f32() / tree_w;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        scale,
        "rasterized svg"
    );

    let mut data = pixmap.take();
    for px in data.chunks_exact_mut(4) {
        let straight = demultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&straight);
    }
    RgbaImage::from_raw(canvas.width, canvas.height, data)
        .ok_or_else(|| ThumbError::render("pixmap size does not match canvas"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;

//! Final compositing: darkened background under the transparent overlay.

use image::RgbaImage;

use crate::assets::decode::{decode_cover_fit, decode_image, encode_png};
use crate::brand::BRAND;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::foundation::math::{demultiply, mul_div255_u8, premultiply, scale_channel};

/// Brightness multiplier applied to every background pixel before the overlay goes on top.
pub const BACKGROUND_BRIGHTNESS: f32 = 0.6;

/// Premultiplied RGBA8 pixel.
pub(crate) type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Scale the colour channels of straight-alpha pixels by `factor`, leaving alpha untouched.
pub(crate) fn darken_in_place(img: &mut RgbaImage, factor: f32) {
    for px in img.pixels_mut() {
        for c in &mut px.0[..3] {
            *c = scale_channel(*c, factor);
        }
    }
}

/// Source-over `overlay` onto `dst`; both straight-alpha and the same size.
pub(crate) fn over_in_place(dst: &mut RgbaImage, overlay: &RgbaImage) -> ThumbResult<()> {
    if dst.dimensions() != overlay.dimensions() {
        return Err(ThumbError::render(format!(
            "overlay is {:?} but background is {:?}",
            overlay.dimensions(),
            dst.dimensions()
        )));
    }
    for (d, s) in dst.pixels_mut().zip(overlay.pixels()) {
        let out = over(premultiply(d.0), premultiply(s.0));
        d.0 = demultiply(out);
    }
    Ok(())
}

/// Composite encoded `background` and `overlay` images into the final canvas-sized PNG.
///
/// The background is cover-fit to the canvas (a no-op for provider output, which is already
/// sized) and darkened to [`BACKGROUND_BRIGHTNESS`]; the overlay must be canvas-sized.
#[tracing::instrument(skip_all, fields(background_len = background.len(), overlay_len = overlay.len()))]
pub fn composite(background: &[u8], overlay: &[u8]) -> ThumbResult<Vec<u8>> {
    composite_on(BRAND.canvas, background, overlay)
}

pub(crate) fn composite_on(canvas: Canvas, background: &[u8], overlay: &[u8]) -> ThumbResult<Vec<u8>> {
    let mut base = decode_cover_fit(background, canvas)?;
    darken_in_place(&mut base, BACKGROUND_BRIGHTNESS);

    let top = decode_image(overlay)?.into_rgba8();
    over_in_place(&mut base, &top)?;

    let png = encode_png(&base)?;
    tracing::debug!(width = canvas.width, height = canvas.height, bytes = png.len(), "composited");
    Ok(png)
}

#[cfg(test)]
#[path = "../tests/unit/composite/composite.rs"]
mod tests;

use std::io::Cursor;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage, imageops::FilterType};

use crate::foundation::core::Canvas;
use crate::foundation::error::{ThumbError, ThumbResult};

/// Decode encoded image bytes (PNG, JPEG, WebP, ...).
pub fn decode_image(bytes: &[u8]) -> ThumbResult<DynamicImage> {
    if bytes.is_empty() {
        return Err(ThumbError::render("image payload is empty"));
    }
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(img)
}

/// Crop-to-fill resize to exactly the canvas. Returns the input untouched when already sized.
pub fn cover_fit(img: DynamicImage, canvas: Canvas) -> RgbaImage {
    if img.width() == canvas.width && img.height() == canvas.height {
        return img.into_rgba8();
    }
    img.resize_to_fill(canvas.width, canvas.height, FilterType::Lanczos3)
        .into_rgba8()
}

/// Decode, cover-fit and return straight-alpha RGBA8 pixels.
pub fn decode_cover_fit(bytes: &[u8], canvas: Canvas) -> ThumbResult<RgbaImage> {
    Ok(cover_fit(decode_image(bytes)?, canvas))
}

/// Encode straight-alpha RGBA8 pixels as PNG.
pub fn encode_png(img: &RgbaImage) -> ThumbResult<Vec<u8>> {
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

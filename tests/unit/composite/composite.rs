use image::Rgba;

use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    encode_png(&RgbaImage::from_pixel(w, h, Rgba(px))).unwrap()
}

fn run(background: &[u8], overlay: &[u8]) -> RgbaImage {
    let png = composite(background, overlay).unwrap();
    decode_image(&png).unwrap().into_rgba8()
}

#[test]
fn transparent_overlay_leaves_darkened_background() {
    let out = run(&solid(1280, 720, [255, 255, 255, 255]), &solid(1280, 720, [0, 0, 0, 0]));
    assert_eq!(out.dimensions(), (1280, 720));
    assert_eq!(out.get_pixel(0, 0).0, [153, 153, 153, 255]);
    assert_eq!(out.get_pixel(1279, 719).0, [153, 153, 153, 255]);
}

#[test]
fn opaque_overlay_replaces_background() {
    let green = solid(1280, 720, [0x16, 0xA3, 0x4A, 255]);
    let out = run(&solid(1280, 720, [255, 255, 255, 255]), &green);
    assert_eq!(out.get_pixel(640, 360).0, [0x16, 0xA3, 0x4A, 255]);
}

#[test]
fn half_alpha_overlay_blends() {
    let out = run(&solid(1280, 720, [0, 0, 0, 255]), &solid(1280, 720, [255, 255, 255, 128]));
    assert_eq!(out.get_pixel(10, 10).0, [128, 128, 128, 255]);
}

#[test]
fn background_is_cover_fit_first() {
    let out = run(&solid(640, 480, [255, 255, 255, 255]), &solid(1280, 720, [0, 0, 0, 0]));
    assert_eq!(out.dimensions(), (1280, 720));
    let px = out.get_pixel(640, 360).0;
    assert!((i32::from(px[0]) - 153).abs() <= 1, "{px:?}");
}

#[test]
fn mismatched_overlay_is_rejected() {
    let err = composite(&solid(1280, 720, [0, 0, 0, 255]), &solid(10, 10, [0, 0, 0, 0]))
        .unwrap_err();
    assert!(matches!(err, ThumbError::Render(_)), "{err}");
}

#[test]
fn undecodable_background_is_an_error() {
    assert!(composite(b"not an image", &solid(1280, 720, [0, 0, 0, 0])).is_err());
}

#[test]
fn over_identities() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    assert_eq!(over([0, 0, 0, 0], [64, 64, 64, 128]), [64, 64, 64, 128]);
}

#[test]
fn darken_keeps_alpha() {
    let mut img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 77]));
    darken_in_place(&mut img, BACKGROUND_BRIGHTNESS);
    assert_eq!(img.get_pixel(1, 1).0, [120, 60, 30, 77]);
}

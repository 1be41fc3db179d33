use super::*;

#[test]
fn canvas_is_youtube_thumbnail_size() {
    assert_eq!(BRAND.canvas.width, 1280);
    assert_eq!(BRAND.canvas.height, 720);
}

#[test]
fn palette_colours_are_opaque_and_distinct() {
    let p = BRAND.palette;
    let all = [
        p.primary,
        p.accent,
        p.neon,
        p.dark,
        p.red,
        p.white,
        p.light_gray,
    ];
    for (i, a) in all.iter().enumerate() {
        assert_eq!(a.a, 255);
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

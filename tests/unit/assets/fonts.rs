use std::path::PathBuf;

use super::*;

fn fonts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

#[test]
fn loads_shipped_fonts() {
    let fonts = FontAssets::load_dir(&fonts_dir()).unwrap();
    assert!(!fonts.bytes(FontWeight::Bold).is_empty());
    assert!(!fonts.bytes(FontWeight::Black).is_empty());
    assert_ne!(
        fonts.bytes(FontWeight::Bold).len(),
        fonts.bytes(FontWeight::Black).len()
    );
}

#[test]
fn missing_directory_is_a_font_error() {
    let err = FontAssets::load_dir(Path::new("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, ThumbError::Font(_)), "{err}");
    assert!(err.to_string().contains(BOLD_FONT_FILE));
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = FontAssets::from_bytes(b"nope".to_vec(), b"nope".to_vec()).unwrap_err();
    assert!(matches!(err, ThumbError::Font(_)));
}

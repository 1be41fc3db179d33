use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ThumbError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ThumbError::font("x").to_string().contains("font error:"));
    assert!(ThumbError::layout("x").to_string().contains("layout error:"));
    assert!(ThumbError::render("x").to_string().contains("render error:"));
    assert!(
        ThumbError::provider("x")
            .to_string()
            .contains("provider error:")
    );
    assert!(
        ThumbError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThumbError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

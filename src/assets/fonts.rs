use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::scene::FontWeight;

/// File name of the bold display weight inside the fonts directory.
pub const BOLD_FONT_FILE: &str = "display-bold.ttf";
/// File name of the black display weight inside the fonts directory. The shipped file is the
/// wide DejaVu Sans Bold, which reads heavier than the condensed bold beside it.
pub const BLACK_FONT_FILE: &str = "display-black.ttf";

/// Raw bytes of the two display weights, validated as parseable fonts.
#[derive(Clone)]
pub struct FontAssets {
    bold: Arc<Vec<u8>>,
    black: Arc<Vec<u8>>,
}

impl fmt::Debug for FontAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAssets")
            .field("bold_len", &self.bold.len())
            .field("black_len", &self.black.len())
            .finish()
    }
}

impl FontAssets {
    /// Load [`BOLD_FONT_FILE`] and [`BLACK_FONT_FILE`] from `dir`.
    ///
    /// Missing or unparseable files are a [`ThumbError::Font`]: there is no fallback font.
    pub fn load_dir(dir: &Path) -> ThumbResult<Self> {
        let bold = read_font(&dir.join(BOLD_FONT_FILE))?;
        let black = read_font(&dir.join(BLACK_FONT_FILE))?;
        tracing::info!(dir = %dir.display(), "loaded display fonts");
        Self::from_bytes(bold, black)
    }

    /// Wrap already loaded font bytes.
    pub fn from_bytes(bold: Vec<u8>, black: Vec<u8>) -> ThumbResult<Self> {
        validate_font(&bold, "bold")?;
        validate_font(&black, "black")?;
        Ok(Self {
            bold: Arc::new(bold),
            black: Arc::new(black),
        })
    }

    /// Bytes for `weight`.
    pub fn bytes(&self, weight: FontWeight) -> &Arc<Vec<u8>> {
        match weight {
            FontWeight::Bold => &self.bold,
            FontWeight::Black => &self.black,
        }
    }
}

fn read_font(path: &Path) -> ThumbResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read font '{}'", path.display()))
        .map_err(|e| ThumbError::font(format!("{e:#}")))
}

fn validate_font(bytes: &[u8], which: &str) -> ThumbResult<()> {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_data(bytes.to_vec());
    if db.is_empty() {
        return Err(ThumbError::font(format!(
            "{which} font bytes contain no usable face"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;

use std::sync::{Arc, Mutex};

use image::RgbaImage;

use crate::analysis::ThumbnailConfig;
use crate::assets::decode::encode_png;
use crate::assets::fonts::FontAssets;
use crate::assets::svg_raster::{parse_svg, rasterize_to_rgba};
use crate::brand::BRAND;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::layout::layout_scene;
use crate::render::svg::scene_svg;
use crate::render::text::TextMeasurer;
use crate::scene::FontWeight;
use crate::templates::build_scene;

/// CSS weight at or above which text is drawn with the [`BLACK_FONT_FILE`] face.
///
/// [`BLACK_FONT_FILE`]: crate::BLACK_FONT_FILE
const BLACK_WEIGHT_THRESHOLD: u16 = 800;

/// Turns a [`ThumbnailConfig`] into a transparent 1280x720 PNG overlay.
///
/// Fonts are parsed once at construction and shared by every render. The renderer is
/// `Send + Sync`; concurrent renders serialize only on text measurement.
pub struct OverlayRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
    bold_face: usvg::fontdb::ID,
    black_face: usvg::fontdb::ID,
    measurer: Mutex<TextMeasurer>,
    canvas: Canvas,
}

impl std::fmt::Debug for OverlayRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayRenderer")
            .field("faces", &self.fontdb.len())
            .field("canvas", &self.canvas)
            .finish()
    }
}

impl OverlayRenderer {
    /// Build a renderer for the brand canvas from already loaded font assets.
    pub fn new(fonts: FontAssets) -> ThumbResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        let bold_face = load_face(&mut db, &fonts, FontWeight::Bold)?;
        let black_face = load_face(&mut db, &fonts, FontWeight::Black)?;
        let measurer = TextMeasurer::new(&fonts)?;
        tracing::info!(faces = db.len(), "overlay renderer ready");
        Ok(Self {
            fontdb: Arc::new(db),
            bold_face,
            black_face,
            measurer: Mutex::new(measurer),
            canvas: BRAND.canvas,
        })
    }

    /// Lay out `config` and serialize it as an SVG document.
    pub fn render_svg(&self, config: &ThumbnailConfig) -> ThumbResult<String> {
        let scene = build_scene(config);
        let items = {
            let mut measurer = self
                .measurer
                .lock()
                .map_err(|_| ThumbError::render("text measurer lock poisoned"))?;
            layout_scene(&scene, self.canvas, &mut measurer)?
        };
        Ok(scene_svg(&items, self.canvas))
    }

    /// Render `config` to straight-alpha RGBA pixels.
    #[tracing::instrument(skip(self, config), fields(template = %config.template))]
    pub fn render_rgba(&self, config: &ThumbnailConfig) -> ThumbResult<RgbaImage> {
        let svg = self.render_svg(config)?;
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            font_resolver: self.font_resolver(),
            ..Default::default()
        };
        let tree = parse_svg(&svg, &opts)?;
        rasterize_to_rgba(&tree, self.canvas)
    }

    /// Render `config` to a transparent PNG.
    pub fn render_png(&self, config: &ThumbnailConfig) -> ThumbResult<Vec<u8>> {
        encode_png(&self.render_rgba(config)?)
    }

    /// Resolver that picks a loaded face by requested weight, ignoring family names.
    fn font_resolver(&self) -> usvg::FontResolver<'static> {
        let bold = self.bold_face;
        let black = self.black_face;
        usvg::FontResolver {
            select_font: Box::new(move |font, _db| {
                if font.weight() >= BLACK_WEIGHT_THRESHOLD {
                    Some(black)
                } else {
                    Some(bold)
                }
            }),
            select_fallback: usvg::FontResolver::default_fallback_selector(),
        }
    }
}

fn load_face(
    db: &mut usvg::fontdb::Database,
    fonts: &FontAssets,
    weight: FontWeight,
) -> ThumbResult<usvg::fontdb::ID> {
    let before: Vec<usvg::fontdb::ID> = db.faces().map(|f| f.id).collect();
    db.load_font_data(fonts.bytes(weight).to_vec());
    db.faces()
        .map(|f| f.id)
        .find(|id| !before.contains(id))
        .ok_or_else(|| ThumbError::font(format!("no face loaded for {weight:?} weight")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;

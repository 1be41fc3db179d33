//! Thumbsmith generates branded 1280x720 YouTube thumbnails from a video title.
//!
//! A title is analyzed into a template and copy (LLM first, keyword heuristic as fallback), a
//! background is requested from an ordered chain of image providers (static gradient as the
//! last resort), the template's visual tree is laid out and rasterized into a transparent
//! overlay, and the two are composited:
//!
//! - Build a [`ThumbnailPipeline`] from [`Settings`] or from its parts
//! - Call [`ThumbnailPipeline::generate`] or [`ThumbnailPipeline::handle`]
//!
//! With no credentials configured every stage runs offline and deterministically.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub mod analysis;
pub mod background;
pub mod brand;
pub mod composite;
pub mod config;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod templates;

pub use crate::analysis::{
    ConfigOverrides, Template, ThumbnailConfig, TitleAnalysis, TitleAnalyzer, heuristic_analysis,
};
pub use crate::assets::decode::{cover_fit, decode_image, encode_png};
pub use crate::assets::fonts::{BLACK_FONT_FILE, BOLD_FONT_FILE, FontAssets};
pub use crate::background::{
    Background, BackgroundGenerator, BackgroundProvider, STATIC_PROVIDER, static_background,
};
pub use crate::brand::BRAND;
pub use crate::composite::{BACKGROUND_BRIGHTNESS, composite};
pub use crate::config::Settings;
pub use crate::foundation::core::{Canvas, Color};
pub use crate::foundation::error::{ThumbError, ThumbResult};
pub use crate::pipeline::{GenerateRequest, GenerateResponse, Thumbnail, ThumbnailPipeline};
pub use crate::render::OverlayRenderer;
pub use crate::scene::Node;
pub use crate::templates::build_scene;

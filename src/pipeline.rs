//! End-to-end orchestration: title -> analysis -> background + overlay -> composite.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::analysis::{ConfigOverrides, ThumbnailConfig, TitleAnalyzer};
use crate::assets::fonts::FontAssets;
use crate::background::BackgroundGenerator;
use crate::composite::composite;
use crate::config::Settings;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::OverlayRenderer;

/// Caller request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Video title.
    pub title: String,
    /// Per-field replacements applied after analysis.
    #[serde(default)]
    pub overrides: Option<ConfigOverrides>,
}

/// Wire response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Base64-encoded PNG.
    pub image: String,
    /// Config actually rendered, overrides applied.
    pub config: ThumbnailConfig,
    /// Analyzer's explanation.
    pub reasoning: String,
    /// Background provider name or `"static"`.
    pub bg_provider: String,
}

/// In-process result of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Final 1280x720 PNG.
    pub png: Vec<u8>,
    /// Config actually rendered.
    pub config: ThumbnailConfig,
    /// Analyzer's explanation.
    pub reasoning: String,
    /// Background provider name or `"static"`.
    pub bg_provider: String,
}

impl From<Thumbnail> for GenerateResponse {
    fn from(t: Thumbnail) -> Self {
        Self {
            image: STANDARD.encode(&t.png),
            config: t.config,
            reasoning: t.reasoning,
            bg_provider: t.bg_provider,
        }
    }
}

/// Immutable pipeline, safe to share across concurrent requests.
#[derive(Debug)]
pub struct ThumbnailPipeline {
    analyzer: TitleAnalyzer,
    backgrounds: BackgroundGenerator,
    renderer: Arc<OverlayRenderer>,
}

impl ThumbnailPipeline {
    /// Assemble a pipeline from its parts.
    pub fn new(
        analyzer: TitleAnalyzer,
        backgrounds: BackgroundGenerator,
        renderer: Arc<OverlayRenderer>,
    ) -> Self {
        Self {
            analyzer,
            backgrounds,
            renderer,
        }
    }

    /// Fully offline pipeline: heuristic analysis and the static background.
    pub fn offline(renderer: Arc<OverlayRenderer>) -> Self {
        Self::new(
            TitleAnalyzer::offline(),
            BackgroundGenerator::offline(),
            renderer,
        )
    }

    /// Build every collaborator from `settings`. Fails only when the fonts cannot be loaded.
    pub fn from_settings(settings: &Settings) -> ThumbResult<Self> {
        let fonts = FontAssets::load_dir(&settings.fonts_dir)?;
        let renderer = Arc::new(OverlayRenderer::new(fonts)?);

        let analyzer = TitleAnalyzer::from_settings(settings)?;
        let backgrounds = BackgroundGenerator::from_settings(settings)?;
        Ok(Self::new(analyzer, backgrounds, renderer))
    }

    /// Shared overlay renderer.
    pub fn renderer(&self) -> &Arc<OverlayRenderer> {
        &self.renderer
    }

    /// Generate a thumbnail for `title`, applying `overrides` to the analyzed config.
    ///
    /// Rejects an empty or whitespace-only title; every external failure after that is absorbed
    /// by a fallback.
    #[tracing::instrument(skip(self, overrides), fields(has_overrides = overrides.is_some()))]
    pub async fn generate(
        &self,
        title: &str,
        overrides: Option<&ConfigOverrides>,
    ) -> ThumbResult<Thumbnail> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ThumbError::validation("title must be non-empty"));
        }

        let analysis = self.analyzer.analyze(title).await;
        let mut config = analysis.config();
        if let Some(o) = overrides {
            config = config.with_overrides(o);
        }
        tracing::info!(template = %config.template, "thumbnail config resolved");

        let background = self.backgrounds.generate(&analysis.image_prompt).await?;
        let overlay = self.renderer.render_png(&config)?;
        let png = composite(&background.buffer, &overlay)?;

        tracing::info!(
            provider = %background.provider,
            bytes = png.len(),
            "thumbnail generated"
        );
        Ok(Thumbnail {
            png,
            config,
            reasoning: analysis.reasoning,
            bg_provider: background.provider,
        })
    }

    /// Serve a wire request.
    pub async fn handle(&self, request: &GenerateRequest) -> ThumbResult<GenerateResponse> {
        let thumb = self
            .generate(&request.title, request.overrides.as_ref())
            .await?;
        Ok(thumb.into())
    }
}

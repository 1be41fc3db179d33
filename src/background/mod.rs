//! Background generator: ordered image providers with a static gradient as the last resort.

pub(crate) mod fallback;
mod providers;

use async_trait::async_trait;

use crate::assets::decode::{decode_cover_fit, encode_png};
use crate::brand::BRAND;
use crate::config::Settings;
use crate::foundation::core::Canvas;
use crate::foundation::error::ThumbResult;

pub use fallback::static_background;
pub use providers::{ImagenImages, OpenAiImages, StabilityImages};

/// Provider identifier reported when the static gradient was used.
pub const STATIC_PROVIDER: &str = "static";

/// One external image-generation service.
#[async_trait]
pub trait BackgroundProvider: Send + Sync {
    /// Stable identifier reported in [`Background::provider`].
    fn name(&self) -> &str;

    /// Generate an image for `prompt`, returning encoded image bytes in any decodable format.
    async fn generate(&self, prompt: &str) -> ThumbResult<Vec<u8>>;
}

/// Canvas-sized PNG background and the provider that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    /// PNG bytes, exactly canvas-sized.
    pub buffer: Vec<u8>,
    /// Provider name or [`STATIC_PROVIDER`].
    pub provider: String,
}

/// Tries providers strictly in order; the first success wins.
pub struct BackgroundGenerator {
    providers: Vec<Box<dyn BackgroundProvider>>,
    canvas: Canvas,
}

impl std::fmt::Debug for BackgroundGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundGenerator")
            .field("providers", &self.provider_names())
            .field("canvas", &self.canvas)
            .finish()
    }
}

impl BackgroundGenerator {
    /// Chain over `providers` in the given priority order, on the brand canvas.
    pub fn new(providers: Vec<Box<dyn BackgroundProvider>>) -> Self {
        Self {
            providers,
            canvas: BRAND.canvas,
        }
    }

    /// Generator that always draws the static gradient.
    pub fn offline() -> Self {
        Self::new(Vec::new())
    }

    /// Chain of every provider that has a credential in `settings`, in fixed priority order.
    pub fn from_settings(settings: &Settings) -> ThumbResult<Self> {
        let timeout = settings.image_timeout();
        let mut providers: Vec<Box<dyn BackgroundProvider>> = Vec::new();
        if let Some(key) = &settings.openai_api_key {
            providers.push(Box::new(OpenAiImages::new(
                key,
                &settings.openai_base_url,
                &settings.openai_image_model,
                timeout,
            )?));
        }
        if let Some(key) = &settings.stability_api_key {
            providers.push(Box::new(StabilityImages::new(
                key,
                &settings.stability_base_url,
                timeout,
            )?));
        }
        if let Some(key) = &settings.imagen_api_key {
            providers.push(Box::new(ImagenImages::new(
                key,
                &settings.imagen_base_url,
                &settings.imagen_model,
                timeout,
            )?));
        }
        let generator = Self::new(providers);
        tracing::info!(providers = ?generator.provider_names(), "background chain configured");
        Ok(generator)
    }

    /// Names of the configured providers in priority order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Produce a background for `prompt`.
    ///
    /// Provider failures are logged and skipped. Only a failure to draw the static gradient
    /// itself is returned as an error.
    #[tracing::instrument(skip(self, prompt))]
    pub async fn generate(&self, prompt: &str) -> ThumbResult<Background> {
        for provider in &self.providers {
            match self.attempt(provider.as_ref(), prompt).await {
                Ok(buffer) => {
                    tracing::info!(provider = %provider.name(), "background generated");
                    return Ok(Background {
                        buffer,
                        provider: provider.name().to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(provider = %provider.name(), error = %e, "background provider failed");
                }
            }
        }

        tracing::info!(provider = STATIC_PROVIDER, "using static background");
        Ok(Background {
            buffer: static_background(self.canvas)?,
            provider: STATIC_PROVIDER.to_string(),
        })
    }

    async fn attempt(&self, provider: &dyn BackgroundProvider, prompt: &str) -> ThumbResult<Vec<u8>> {
        let bytes = provider.generate(prompt).await?;
        let fitted = decode_cover_fit(&bytes, self.canvas)?;
        encode_png(&fitted)
    }
}

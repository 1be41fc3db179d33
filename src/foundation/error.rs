/// Convenience result type used across thumbsmith.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Provider and LLM failures are absorbed by the fallback chains and only ever surface in logs;
/// the variants a caller of [`ThumbnailPipeline`](crate::ThumbnailPipeline) can observe are
/// `Validation` (bad input) and `Font` (missing or unusable font assets).
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font assets missing, unreadable or unparseable.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while computing the flexbox layout of a visual tree.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while rasterizing, decoding or encoding images.
    #[error("render error: {0}")]
    Render(String),

    /// An external text or image generation service failed.
    #[error("provider error: {0}")]
    Provider(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ThumbError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`ThumbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ThumbError::Provider`] value.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Build a [`ThumbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<taffy::TaffyError> for ThumbError {
    fn from(e: taffy::TaffyError) -> Self {
        Self::Layout(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

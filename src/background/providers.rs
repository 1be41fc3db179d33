use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::json;

use crate::background::BackgroundProvider;
use crate::foundation::error::{ThumbError, ThumbResult};

fn http_client(name: &str, timeout: Duration) -> ThumbResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ThumbError::provider(format!("{name}: build http client: {e}")))
}

async fn success(name: &str, response: reqwest::Response) -> ThumbResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ThumbError::provider(format!(
        "{name} returned HTTP {status}: {}",
        body.chars().take(200).collect::<String>()
    )))
}

fn decode_b64(name: &str, payload: Option<String>) -> ThumbResult<Vec<u8>> {
    let payload = payload
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ThumbError::provider(format!("{name} response has no image payload")))?;
    STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ThumbError::provider(format!("{name} image payload is not base64: {e}")))
}

/// OpenAI-compatible `images/generations` endpoint returning `b64_json`.
pub struct OpenAiImages {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct OpenAiImagesResponse {
    #[serde(default)]
    data: Vec<OpenAiImageData>,
}

#[derive(Deserialize)]
struct OpenAiImageData {
    #[serde(default)]
    b64_json: Option<String>,
}

impl OpenAiImages {
    /// Provider identifier.
    pub const NAME: &'static str = "openai";

    /// Client for `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(api_key: &str, base_url: &str, model: &str, timeout: Duration) -> ThumbResult<Self> {
        Ok(Self {
            http: http_client(Self::NAME, timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl BackgroundProvider for OpenAiImages {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn generate(&self, prompt: &str) -> ThumbResult<Vec<u8>> {
        let response = self
            .http
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "prompt": prompt,
                "n": 1,
                "size": "1792x1024",
                "response_format": "b64_json",
            }))
            .send()
            .await
            .map_err(|e| ThumbError::provider(format!("openai request failed: {e}")))?;
        let parsed: OpenAiImagesResponse = success(Self::NAME, response)
            .await?
            .json()
            .await
            .map_err(|e| ThumbError::provider(format!("openai response is not valid json: {e}")))?;
        decode_b64(
            Self::NAME,
            parsed.data.into_iter().next().and_then(|d| d.b64_json),
        )
    }
}

/// Stability-style endpoint answering with raw image bytes.
pub struct StabilityImages {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl StabilityImages {
    /// Provider identifier.
    pub const NAME: &'static str = "stability";

    /// Client for `base_url` (e.g. `https://api.stability.ai`).
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> ThumbResult<Self> {
        Ok(Self {
            http: http_client(Self::NAME, timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BackgroundProvider for StabilityImages {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn generate(&self, prompt: &str) -> ThumbResult<Vec<u8>> {
        let form = reqwest::multipart::Form::new()
            .text("prompt", prompt.to_string())
            .text("aspect_ratio", "16:9")
            .text("output_format", "png");
        let response = self
            .http
            .post(format!("{}/v2beta/stable-image/generate/core", self.base_url))
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "image/*")
            .multipart(form)
            .send()
            .await
            .map_err(|e| ThumbError::provider(format!("stability request failed: {e}")))?;
        let bytes = success(Self::NAME, response)
            .await?
            .bytes()
            .await
            .map_err(|e| ThumbError::provider(format!("stability body read failed: {e}")))?;
        if bytes.is_empty() {
            return Err(ThumbError::provider("stability response has no image payload"));
        }
        Ok(bytes.to_vec())
    }
}

/// Imagen-style `models/{model}:predict` endpoint returning `bytesBase64Encoded`.
pub struct ImagenImages {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ImagenResponse {
    #[serde(default)]
    predictions: Vec<ImagenPrediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagenPrediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
}

impl ImagenImages {
    /// Provider identifier.
    pub const NAME: &'static str = "imagen";

    /// Client for `base_url` (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(api_key: &str, base_url: &str, model: &str, timeout: Duration) -> ThumbResult<Self> {
        Ok(Self {
            http: http_client(Self::NAME, timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl BackgroundProvider for ImagenImages {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn generate(&self, prompt: &str) -> ThumbResult<Vec<u8>> {
        let response = self
            .http
            .post(format!("{}/models/{}:predict", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "instances": [{ "prompt": prompt }],
                "parameters": { "sampleCount": 1, "aspectRatio": "16:9" },
            }))
            .send()
            .await
            .map_err(|e| ThumbError::provider(format!("imagen request failed: {e}")))?;
        let parsed: ImagenResponse = success(Self::NAME, response)
            .await?
            .json()
            .await
            .map_err(|e| ThumbError::provider(format!("imagen response is not valid json: {e}")))?;
        decode_b64(
            Self::NAME,
            parsed
                .predictions
                .into_iter()
                .next()
                .and_then(|p| p.bytes_base64_encoded),
        )
    }
}

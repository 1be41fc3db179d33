//! Process configuration read from `THUMBSMITH_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::foundation::error::{ThumbError, ThumbResult};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "THUMBSMITH_";

/// Runtime settings. Every field is optional; an absent credential disables its collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Credential for the LLM and the primary image provider.
    pub openai_api_key: Option<String>,
    /// Chat-completions base URL.
    pub llm_base_url: String,
    /// Chat model.
    pub llm_model: String,
    /// Image model of the primary provider.
    pub openai_image_model: String,
    /// Images API base URL of the primary provider.
    pub openai_base_url: String,
    /// Credential for the secondary image provider.
    pub stability_api_key: Option<String>,
    /// Secondary provider base URL.
    pub stability_base_url: String,
    /// Credential for the tertiary image provider.
    pub imagen_api_key: Option<String>,
    /// Tertiary provider base URL.
    pub imagen_base_url: String,
    /// Tertiary provider model.
    pub imagen_model: String,
    /// Directory holding the two display font files.
    pub fonts_dir: PathBuf,
    /// LLM request timeout in seconds.
    pub llm_timeout_secs: u64,
    /// Per-provider image request timeout in seconds.
    pub image_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            llm_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "gpt-4o-mini".to_string(),
            openai_image_model: "dall-e-3".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            stability_api_key: None,
            stability_base_url: "https://api.stability.ai".to_string(),
            imagen_api_key: None,
            imagen_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            imagen_model: "imagen-3.0-generate-002".to_string(),
            fonts_dir: PathBuf::from("assets/fonts"),
            llm_timeout_secs: 15,
            image_timeout_secs: 20,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> ThumbResult<Self> {
        let settings: Self = envy::prefixed(ENV_PREFIX)
            .from_env()
            .map_err(|e| ThumbError::validation(format!("invalid {ENV_PREFIX}* setting: {e}")))?;
        Ok(settings.normalized())
    }

    /// Read settings from explicit `(KEY, value)` pairs, e.g. in tests.
    pub fn from_vars<I>(vars: I) -> ThumbResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let settings: Self = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| ThumbError::validation(format!("invalid {ENV_PREFIX}* setting: {e}")))?;
        Ok(settings.normalized())
    }

    /// Blank credentials count as unset.
    fn normalized(mut self) -> Self {
        for key in [
            &mut self.openai_api_key,
            &mut self.stability_api_key,
            &mut self.imagen_api_key,
        ] {
            if key.as_deref().is_some_and(|k| k.trim().is_empty()) {
                *key = None;
            }
        }
        self
    }

    /// LLM timeout.
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Image provider timeout.
    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

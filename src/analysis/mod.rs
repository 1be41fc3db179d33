//! Title analysis: free-text title -> template choice + thumbnail copy.
//!
//! [`TitleAnalyzer`] asks an LLM when a credential is configured and silently falls back to
//! [`heuristic_analysis`] on any failure, so analysis never fails.

pub(crate) mod heuristic;
pub(crate) mod llm;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::foundation::error::{ThumbError, ThumbResult};

pub use heuristic::heuristic_analysis;
pub use llm::{ChatClient, ChatClientOpts};

/// Marker separating the two lines of a headline.
pub const LINE_BREAK: char = '\n';

/// One of the five fixed layout styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Circular metric badge; speed/time messaging.
    #[default]
    Speed,
    /// Urgency bar plus metric box; growth/revenue messaging.
    Conversion,
    /// Fixed split-screen competitor comparison.
    Comparison,
    /// Pill-shaped metric badge; product features.
    Feature,
    /// Shield badge; accuracy/security messaging.
    Trust,
}

impl Template {
    /// All templates in declaration order.
    pub const ALL: [Template; 5] = [
        Template::Speed,
        Template::Conversion,
        Template::Comparison,
        Template::Feature,
        Template::Trust,
    ];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Speed => "speed",
            Template::Conversion => "conversion",
            Template::Comparison => "comparison",
            Template::Feature => "feature",
            Template::Trust => "trust",
        }
    }

    /// Parse an externally supplied name, correcting anything unknown to [`Template::Speed`].
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Template::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ThumbError::validation(format!("unknown template '{s}'")))
    }
}

/// Output of the analysis step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAnalysis {
    /// Selected layout.
    pub template: Template,
    /// Uppercase headline, at most two lines separated by [`LINE_BREAK`].
    pub headline: String,
    /// Uppercase tagline.
    pub subtext: String,
    /// Badge text; empty means no badge.
    pub metric: String,
    /// Explanation of `metric`; empty when `metric` is empty.
    pub metric_label: String,
    /// Prompt for the background image generator.
    pub image_prompt: String,
    /// Why this template was chosen.
    pub reasoning: String,
}

impl TitleAnalysis {
    /// Render-relevant subset.
    pub fn config(&self) -> ThumbnailConfig {
        ThumbnailConfig {
            template: self.template,
            headline: self.headline.clone(),
            subtext: self.subtext.clone(),
            metric: self.metric.clone(),
            metric_label: self.metric_label.clone(),
        }
    }
}

/// Everything the template layout engine needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailConfig {
    /// Selected layout.
    pub template: Template,
    /// Uppercase headline, at most two lines separated by [`LINE_BREAK`].
    pub headline: String,
    /// Uppercase tagline.
    pub subtext: String,
    /// Badge text; empty means no badge.
    #[serde(default)]
    pub metric: String,
    /// Explanation of `metric`.
    #[serde(default)]
    pub metric_label: String,
}

impl ThumbnailConfig {
    /// Apply caller overrides. Present fields replace the current value outright.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(t) = overrides.template {
            self.template = t;
        }
        if let Some(v) = &overrides.headline {
            self.headline = v.clone();
        }
        if let Some(v) = &overrides.subtext {
            self.subtext = v.clone();
        }
        if let Some(v) = &overrides.metric {
            self.metric = v.clone();
        }
        if let Some(v) = &overrides.metric_label {
            self.metric_label = v.clone();
        }
        self
    }

    /// Headline split on [`LINE_BREAK`].
    pub fn headline_lines(&self) -> Vec<&str> {
        if self.headline.is_empty() {
            return Vec::new();
        }
        self.headline.split(LINE_BREAK).collect()
    }
}

/// Partial [`ThumbnailConfig`] supplied by a caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    /// Replacement template.
    #[serde(default)]
    pub template: Option<Template>,
    /// Replacement headline.
    #[serde(default)]
    pub headline: Option<String>,
    /// Replacement subtext.
    #[serde(default)]
    pub subtext: Option<String>,
    /// Replacement metric.
    #[serde(default)]
    pub metric: Option<String>,
    /// Replacement metric label.
    #[serde(default)]
    pub metric_label: Option<String>,
}

impl ConfigOverrides {
    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// LLM-backed analyzer with a deterministic fallback.
pub struct TitleAnalyzer {
    llm: Option<ChatClient>,
}

impl fmt::Debug for TitleAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleAnalyzer")
            .field("llm", &self.llm.is_some())
            .finish()
    }
}

impl TitleAnalyzer {
    /// Analyzer that never touches the network.
    pub fn offline() -> Self {
        Self { llm: None }
    }

    /// Analyzer that asks `llm` first.
    pub fn with_llm(llm: ChatClient) -> Self {
        Self { llm: Some(llm) }
    }

    /// LLM-backed analyzer when `settings` carries a credential, offline otherwise.
    pub fn from_settings(settings: &Settings) -> ThumbResult<Self> {
        let Some(key) = &settings.openai_api_key else {
            return Ok(Self::offline());
        };
        let client = ChatClient::new(
            ChatClientOpts::new(key.as_str())
                .with_base_url(settings.llm_base_url.as_str())
                .with_model(settings.llm_model.as_str())
                .with_timeout(settings.llm_timeout()),
        )?;
        Ok(Self::with_llm(client))
    }

    /// `true` when an LLM client is configured.
    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// Analyze `title`. Never fails; LLM problems are logged and the heuristic result returned.
    #[tracing::instrument(skip(self), fields(llm = self.llm.is_some()))]
    pub async fn analyze(&self, title: &str) -> TitleAnalysis {
        let Some(llm) = &self.llm else {
            return heuristic_analysis(title);
        };

        match llm.analyze_title(title).await {
            Ok(analysis) => {
                tracing::info!(template = %analysis.template, "llm analysis succeeded");
                analysis
            }
            Err(e) => {
                tracing::warn!(error = %e, "llm analysis failed, using heuristic");
                heuristic_analysis(title)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/model.rs"]
mod tests;

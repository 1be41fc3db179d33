use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::heuristic::HEURISTIC_IMAGE_PROMPT;
use crate::analysis::{LINE_BREAK, Template, TitleAnalysis};
use crate::foundation::error::{ThumbError, ThumbResult};

pub(crate) const SYSTEM_PROMPT: &str = r#"You design YouTube thumbnails for Quotely, an insurance quoting platform for independent agencies.
Given a video title, choose ONE template and write the thumbnail copy.

Templates:
- "speed": the title is about speed or time saved. Large circular metric badge.
- "conversion": the title is about growth, revenue, retention or losing customers. Urgency bar and metric box.
- "comparison": the title compares Quotely with a competitor. Fixed split-screen layout.
- "feature": the title announces or explains a product feature. Pill-shaped metric badge.
- "trust": the title is about accuracy, transparency, reliability or security. Shield badge.

Rules:
- headline: UPPERCASE, max 2 lines separated by "\n", max ~20 characters per line, readable at thumbnail size.
- subtext: UPPERCASE tagline of 3-5 words.
- metric: short number or label such as "24 SEC" or "3X"; empty string when the title has no metric.
- metricLabel: 2-4 words explaining the metric; empty string when metric is empty.
- imagePrompt: abstract background with no text, no letters, dark moody cinematic lighting, green accents.
- reasoning: one sentence explaining the template choice.

Respond with ONLY a JSON object of this exact shape:
{"template":"speed|conversion|comparison|feature|trust","headline":"...","subtext":"...","metric":"...","metricLabel":"...","imagePrompt":"...","reasoning":"..."}"#;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone, Debug)]
pub struct ChatClientOpts {
    /// Bearer credential.
    pub api_key: String,
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl ChatClientOpts {
    /// Defaults for the public OpenAI API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the base URL (proxies, compatible gateways, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Minimal chat-completions client used for title analysis.
pub struct ChatClient {
    http: reqwest::Client,
    opts: ChatClientOpts,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    subtext: Option<String>,
    #[serde(default)]
    metric: Option<String>,
    #[serde(default)]
    metric_label: Option<String>,
    #[serde(default)]
    image_prompt: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
}

impl ChatClient {
    /// Build a client with its own connection pool and timeout.
    pub fn new(opts: ChatClientOpts) -> ThumbResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| ThumbError::provider(format!("build llm http client: {e}")))?;
        Ok(Self { http, opts })
    }

    /// Ask the model to analyze `title` and parse its answer.
    pub async fn analyze_title(&self, title: &str) -> ThumbResult<TitleAnalysis> {
        let user = format!("Video title: {title}");
        let content = self.complete(SYSTEM_PROMPT, &user).await?;
        parse_analysis(&content)
    }

    /// One chat completion; returns the first choice's content.
    pub async fn complete(&self, system: &str, user: &str) -> ThumbResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.opts.base_url.trim_end_matches('/')
        );
        let body = ChatRequest {
            model: &self.opts.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.7,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(model = %self.opts.model, "requesting llm title analysis");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.opts.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ThumbError::provider(format!("llm request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ThumbError::provider(format!(
                "llm returned HTTP {status}: {text}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ThumbError::provider(format!("llm response is not valid json: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ThumbError::provider("llm response has no content"))
    }
}

/// Parse and normalise a model answer into a [`TitleAnalysis`].
pub(crate) fn parse_analysis(content: &str) -> ThumbResult<TitleAnalysis> {
    let json = extract_json_object(content)
        .ok_or_else(|| ThumbError::serde("llm content contains no json object"))?;
    let raw: RawAnalysis =
        serde_json::from_str(json).map_err(|e| ThumbError::serde(e.to_string()))?;

    let template_name = raw.template.unwrap_or_default();
    let template = Template::parse_or_default(&template_name);
    if !template.as_str().eq_ignore_ascii_case(template_name.trim()) {
        tracing::debug!(returned = %template_name, "llm returned an unknown template, using speed");
    }

    let headline = normalize_headline(raw.headline.as_deref().unwrap_or_default());
    if headline.is_empty() {
        return Err(ThumbError::serde("llm analysis has an empty headline"));
    }

    let metric = raw.metric.unwrap_or_default().trim().to_uppercase();
    let metric_label = if metric.is_empty() {
        String::new()
    } else {
        raw.metric_label.unwrap_or_default().trim().to_string()
    };

    let reasoning = raw
        .reasoning
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| format!("The model selected the {template} template."));

    Ok(TitleAnalysis {
        template,
        headline,
        subtext: raw.subtext.unwrap_or_default().trim().to_uppercase(),
        metric,
        metric_label,
        image_prompt: constrain_image_prompt(raw.image_prompt.as_deref().unwrap_or_default()),
        reasoning,
    })
}

/// Upper-case the headline and fold it into at most two non-empty lines; everything after
/// the first line joins the second.
fn normalize_headline(headline: &str) -> String {
    let mut lines = headline
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_uppercase);
    let Some(first) = lines.next() else {
        return String::new();
    };
    let rest: Vec<String> = lines.collect();
    if rest.is_empty() {
        first
    } else {
        format!("{first}{LINE_BREAK}{}", rest.join(" "))
    }
}

/// Force the background prompt to stay text-free and dark.
fn constrain_image_prompt(prompt: &str) -> String {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return HEURISTIC_IMAGE_PROMPT.to_string();
    }
    let lower = prompt.to_lowercase();
    let mut out = prompt.trim_end_matches('.').to_string();
    if !lower.contains("cinematic") {
        out.push_str(", dark moody cinematic lighting");
    }
    if !lower.contains("no text") {
        out.push_str(", no text, no letters");
    }
    out
}

/// Slice out the outermost `{...}`, tolerating Markdown fences and chatter around it.
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/llm.rs"]
mod tests;

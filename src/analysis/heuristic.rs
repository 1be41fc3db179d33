use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::{LINE_BREAK, Template, TitleAnalysis};

pub(crate) const HEURISTIC_SUBTEXT: &str = "INSURANCE QUOTING REIMAGINED";
pub(crate) const HEURISTIC_METRIC_LABEL: &str = "key metric";
pub(crate) const HEURISTIC_IMAGE_PROMPT: &str = "Abstract dark technology background, flowing \
    green data streams and soft glowing particles, deep shadows, dark moody cinematic lighting, \
    shallow depth of field, no text, no letters, no words, no logos";

const MAX_HEADLINE_CHARS: usize = 20;
const MAX_HEADLINE_WORDS: usize = 4;

/// Keyword groups in match priority order. First group with any substring hit wins.
const KEYWORD_GROUPS: [(Template, &[&str]); 4] = [
    (Template::Comparison, &["vs", "versus", "compared"]),
    (
        Template::Speed,
        &["fast", "speed", "second", "quick", "instant", "time"],
    ),
    (
        Template::Trust,
        &["trust", "accura", "transparen", "reliab", "safe", "secur"],
    ),
    (
        Template::Conversion,
        &[
            "convert",
            "grow",
            "revenue",
            "stop losing",
            "customer",
            "retention",
            "churn",
        ],
    ),
];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex"));
static METRIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+[\w%]*").expect("static regex"));

/// Deterministic, network-free analysis of `title`.
pub fn heuristic_analysis(title: &str) -> TitleAnalysis {
    let lower = title.to_lowercase();
    let matched = KEYWORD_GROUPS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(t, _)| *t);
    let template = matched.unwrap_or(Template::Feature);

    let metric = METRIC
        .find(title)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_default();
    let metric_label = if metric.is_empty() {
        String::new()
    } else {
        HEURISTIC_METRIC_LABEL.to_string()
    };

    let reasoning = match matched {
        Some(t) => format!("Heuristic: the title contains {t} keywords, so the {t} template fits."),
        None => "Heuristic: no keyword group matched, defaulting to the feature template.".to_string(),
    };

    TitleAnalysis {
        template,
        headline: heuristic_headline(title),
        subtext: HEURISTIC_SUBTEXT.to_string(),
        metric,
        metric_label,
        image_prompt: HEURISTIC_IMAGE_PROMPT.to_string(),
        reasoning,
    }
}

/// Up to four significant words, upper-cased, broken into two lines when too long.
///
/// A single oversized word is never broken.
pub(crate) fn heuristic_headline(title: &str) -> String {
    let stripped = PUNCTUATION.replace_all(title, "");
    let words: Vec<&str> = stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .take(MAX_HEADLINE_WORDS)
        .collect();

    let joined = words.join(" ").to_uppercase();
    if joined.chars().count() <= MAX_HEADLINE_CHARS || words.len() < 2 {
        return joined;
    }

    let split_at = if words.len() >= 3 { 2 } else { 1 };
    let first = words[..split_at].join(" ");
    let second = words[split_at..].join(" ");
    format!("{first}{LINE_BREAK}{second}").to_uppercase()
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/heuristic.rs"]
mod tests;

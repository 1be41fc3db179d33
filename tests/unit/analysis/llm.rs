use super::*;

#[test]
fn parses_well_formed_answer() {
    let content = r#"{"template":"speed","headline":"QUOTE IN\n24 SECONDS","subtext":"15 carriers one click","metric":"24 sec","metricLabel":"per quote","imagePrompt":"Abstract green light trails, dark moody cinematic lighting, no text","reasoning":"The title is about speed."}"#;
    let a = parse_analysis(content).unwrap();
    assert_eq!(a.template, Template::Speed);
    assert_eq!(a.headline, "QUOTE IN\n24 SECONDS");
    assert_eq!(a.subtext, "15 CARRIERS ONE CLICK");
    assert_eq!(a.metric, "24 SEC");
    assert_eq!(a.metric_label, "per quote");
    assert_eq!(
        a.image_prompt,
        "Abstract green light trails, dark moody cinematic lighting, no text"
    );
    assert_eq!(a.reasoning, "The title is about speed.");
}

#[test]
fn invalid_template_is_corrected_to_speed() {
    let content = r#"{"template":"banner","headline":"HELLO"}"#;
    assert_eq!(parse_analysis(content).unwrap().template, Template::Speed);
    let missing = r#"{"headline":"HELLO"}"#;
    assert_eq!(parse_analysis(missing).unwrap().template, Template::Speed);
}

#[test]
fn fenced_answers_are_unwrapped() {
    let content = "```json\n{\"template\":\"trust\",\"headline\":\"ZERO ERRORS\"}\n```";
    let a = parse_analysis(content).unwrap();
    assert_eq!(a.template, Template::Trust);
    assert_eq!(a.headline, "ZERO ERRORS");
}

#[test]
fn metric_label_cleared_without_metric() {
    let content = r#"{"template":"feature","headline":"NEW","metric":"","metricLabel":"orphan"}"#;
    let a = parse_analysis(content).unwrap();
    assert_eq!(a.metric, "");
    assert_eq!(a.metric_label, "");
}

#[test]
fn image_prompt_is_constrained() {
    let content = r#"{"template":"feature","headline":"NEW","imagePrompt":"A neon city."}"#;
    let a = parse_analysis(content).unwrap();
    assert!(a.image_prompt.starts_with("A neon city"));
    assert!(a.image_prompt.contains("cinematic"));
    assert!(a.image_prompt.contains("no text"));

    let empty = parse_analysis(r#"{"template":"feature","headline":"NEW"}"#).unwrap();
    assert_eq!(empty.image_prompt, HEURISTIC_IMAGE_PROMPT);
}

#[test]
fn garbage_and_empty_headlines_are_errors() {
    assert!(parse_analysis("I cannot help with that").is_err());
    assert!(parse_analysis("{not json}").is_err());
    assert!(parse_analysis(r#"{"template":"speed","headline":"  "}"#).is_err());
}

#[test]
fn system_prompt_names_every_template() {
    for t in Template::ALL {
        assert!(SYSTEM_PROMPT.contains(&format!("\"{t}\"")), "{t}");
    }
}

#[test]
fn headline_is_folded_into_two_lines() {
    let content = r#"{"template":"speed","headline":"quote\nin 24\nseconds flat"}"#;
    let a = parse_analysis(content).unwrap();
    assert_eq!(a.headline, "QUOTE\nIN 24 SECONDS FLAT");
    assert_eq!(a.headline.matches(LINE_BREAK).count(), 1);
}

#[test]
fn blank_headline_lines_are_dropped() {
    let content = r#"{"template":"speed","headline":"\n  zero errors \r\n\n"}"#;
    assert_eq!(parse_analysis(content).unwrap().headline, "ZERO ERRORS");
}

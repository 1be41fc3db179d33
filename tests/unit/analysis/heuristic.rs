use super::*;

#[test]
fn comparison_keyword_beats_speed_keywords() {
    let a = heuristic_analysis("vs Applied Systems: Quote in 24 seconds");
    assert_eq!(a.template, Template::Comparison);
    assert_eq!(a.metric, "24");
    assert_eq!(a.metric_label, HEURISTIC_METRIC_LABEL);
}

#[test]
fn comparison_wins_for_every_comparison_word() {
    for title in [
        "Quotely versus the rest: fast and safe",
        "Compared to legacy raters, we grow revenue",
        "EZLynx vs Quotely in 10 seconds",
    ] {
        assert_eq!(heuristic_analysis(title).template, Template::Comparison, "{title}");
    }
}

#[test]
fn groups_are_tested_in_priority_order() {
    assert_eq!(
        heuristic_analysis("Fast and secure quoting").template,
        Template::Speed
    );
    assert_eq!(
        heuristic_analysis("Accurate quotes your customers trust").template,
        Template::Trust
    );
    assert_eq!(
        heuristic_analysis("Stop losing leads to slow follow-up").template,
        Template::Conversion
    );
    assert_eq!(
        heuristic_analysis("Boost retention 50% with automation").template,
        Template::Conversion
    );
    assert_eq!(
        heuristic_analysis("New dashboard for agents").template,
        Template::Feature
    );
}

#[test]
fn empty_title_is_feature_with_empty_copy() {
    let a = heuristic_analysis("");
    assert_eq!(a.template, Template::Feature);
    assert_eq!(a.headline, "");
    assert_eq!(a.metric, "");
    assert_eq!(a.metric_label, "");
    assert_eq!(a.subtext, HEURISTIC_SUBTEXT);
}

#[test]
fn template_is_always_one_of_the_five() {
    for title in [
        "",
        "!!!",
        "12345",
        "vs",
        "Quote 3x Faster Than EZLynx",
        "Why agencies churn",
        "ünïcödé títlé",
    ] {
        let t = heuristic_analysis(title).template;
        assert!(Template::ALL.contains(&t), "{title}");
    }
}

#[test]
fn long_headline_splits_two_words_per_line() {
    let a = heuristic_analysis("Quote 3x Faster Than EZLynx");
    assert_eq!(a.template, Template::Speed);
    assert_eq!(a.metric, "3X");
    assert_eq!(a.headline, "QUOTE FASTER\nTHAN EZLYNX");

    let b = heuristic_analysis("vs Applied Systems: Quote in 24 seconds");
    assert_eq!(b.headline, "APPLIED SYSTEMS\nQUOTE SECONDS");
}

#[test]
fn headline_over_twenty_chars_has_exactly_one_break() {
    for title in [
        "New dashboard for agents",
        "Carriers connected through one simple portal today",
        "Supercalifragilistic Extraordinary",
        "Insurance agencies growing",
    ] {
        let stripped = PUNCTUATION.replace_all(title, "");
        let joined: Vec<&str> = stripped
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .take(4)
            .collect();
        let joined = joined.join(" ");
        let headline = heuristic_headline(title);
        if joined.chars().count() > 20 {
            assert_eq!(headline.matches(LINE_BREAK).count(), 1, "{title}");
            for segment in headline.split(LINE_BREAK) {
                assert!(segment.split_whitespace().count() <= 2, "{title}");
            }
        } else {
            assert!(!headline.contains(LINE_BREAK), "{title}");
        }
    }
}

#[test]
fn short_headline_stays_on_one_line() {
    let a = heuristic_analysis("Quote faster");
    assert_eq!(a.headline, "QUOTE FASTER");
}

#[test]
fn short_tokens_and_punctuation_are_dropped() {
    assert_eq!(heuristic_headline("AI: is it on?"), "");
    assert_eq!(heuristic_headline("Don't wait!"), "DONT WAIT");
}

#[test]
fn metric_keeps_percent_and_suffix() {
    assert_eq!(heuristic_analysis("Cut quote time by 80%").metric, "80%");
    assert_eq!(heuristic_analysis("Close 3x more deals").metric, "3X");
    assert_eq!(heuristic_analysis("Close more deals").metric, "");
}

#[test]
fn reasoning_names_the_matched_category() {
    assert!(
        heuristic_analysis("Instant quotes")
            .reasoning
            .contains("speed")
    );
    assert!(
        heuristic_analysis("New dashboard")
            .reasoning
            .contains("feature")
    );
}

#[test]
fn image_prompt_excludes_text() {
    let a = heuristic_analysis("anything");
    assert!(a.image_prompt.contains("no text"));
    assert!(a.image_prompt.contains("dark moody cinematic"));
}

use super::*;
use crate::brand::BRAND;
use crate::scene::{Dim, Shape};

fn config(template: Template, headline: &str, metric: &str) -> ThumbnailConfig {
    ThumbnailConfig {
        template,
        headline: headline.to_string(),
        subtext: "INSURANCE QUOTING REIMAGINED".to_string(),
        metric: metric.to_string(),
        metric_label: if metric.is_empty() {
            String::new()
        } else {
            "key metric".to_string()
        },
    }
}

fn headline_top(tree: &Node, first_line: &str) -> f32 {
    tree.children()
        .iter()
        .find(|c| c.texts().first() == Some(&first_line))
        .and_then(|c| c.style().inset.top)
        .expect("headline block")
}

#[test]
fn templates_are_deterministic() {
    for t in Template::ALL {
        let c = config(t, "QUOTE FASTER\nTHAN EZLYNX", "3X");
        assert_eq!(build_scene(&c), build_scene(&c), "{t}");
    }
}

#[test]
fn every_template_has_the_brand_bar() {
    for t in Template::ALL {
        let tree = build_scene(&config(t, "HELLO", "3X"));
        let texts = tree.texts();
        assert!(texts.contains(&BRAND.wordmark), "{t}");
        assert!(texts.contains(&BRAND.site_label), "{t}");
        assert_eq!(
            tree.style().width,
            Dim::Px(BRAND.canvas.width as f32),
            "{t}"
        );
    }
}

#[test]
fn headline_lines_and_subtext_render_in_order() {
    let tree = build_scene(&config(Template::Feature, "QUOTE FASTER\nTHAN EZLYNX", ""));
    let texts = tree.texts();
    let i = texts.iter().position(|t| *t == "QUOTE FASTER").unwrap();
    assert_eq!(texts[i + 1], "THAN EZLYNX");
    assert_eq!(texts[i + 2], "INSURANCE QUOTING REIMAGINED");
}

#[test]
fn two_line_headline_starts_higher() {
    let one = build_scene(&config(Template::Speed, "QUOTE FASTER", "3X"));
    let two = build_scene(&config(Template::Speed, "QUOTE FASTER\nTHAN EZLYNX", "3X"));
    assert!(headline_top(&two, "QUOTE FASTER") < headline_top(&one, "QUOTE FASTER"));
}

#[test]
fn speed_badge_only_with_metric() {
    let with = build_scene(&config(Template::Speed, "HELLO", "24 SEC"));
    let texts = with.texts();
    assert!(texts.contains(&"24 SEC"));
    assert!(texts.contains(&"key metric"));
    let badge = &with.children()[0];
    assert_eq!(badge.style().background, Some(BRAND.palette.red));
    assert_eq!(badge.style().radius, 150.0);

    let without = build_scene(&config(Template::Speed, "HELLO", ""));
    assert_eq!(without.children().len(), 2);
    assert!(!without.texts().contains(&"key metric"));
}

#[test]
fn conversion_has_full_height_urgency_bar() {
    let tree = build_scene(&config(Template::Conversion, "STOP LOSING", "40%"));
    let bar = &tree.children()[0];
    assert_eq!(bar.style().height, Dim::Percent(1.0));
    assert_eq!(bar.style().inset.left, Some(0.0));
    assert_eq!(bar.style().background, Some(BRAND.palette.red));
    assert!(tree.texts().contains(&"40%"));

    let no_metric = build_scene(&config(Template::Conversion, "STOP LOSING", ""));
    assert_eq!(no_metric.children().len(), 3);
}

#[test]
fn comparison_ignores_config_copy() {
    let tree = build_scene(&config(Template::Comparison, "SHOULD NOT SHOW", "9X"));
    let texts = tree.texts();
    for fixed in [
        "QUOTELY",
        "2 MIN",
        "15 carriers, instant",
        "APPLIED SYSTEMS",
        "15 MIN",
        "manual, per-carrier",
    ] {
        assert!(texts.contains(&fixed), "{fixed}");
    }
    assert!(!texts.contains(&"SHOULD NOT SHOW"));
    assert!(!texts.contains(&"9X"));
    assert!(!texts.contains(&"key metric"));

    let other = build_scene(&config(Template::Comparison, "DIFFERENT", ""));
    assert_eq!(tree, other);
}

#[test]
fn comparison_divider_is_red_between_panels() {
    let tree = build_scene(&config(Template::Comparison, "", ""));
    let panels = &tree.children()[0];
    let kids = panels.children();
    assert_eq!(kids.len(), 3);
    assert_eq!(kids[0].style().background, Some(BRAND.palette.primary));
    assert_eq!(kids[1].style().background, Some(BRAND.palette.red));
    assert_eq!(kids[2].style().background, Some(BRAND.palette.dark));
}

#[test]
fn feature_pill_is_accent_with_dark_text() {
    let tree = build_scene(&config(Template::Feature, "NEW", "1 CLICK"));
    let pill = &tree.children()[0];
    assert_eq!(pill.style().background, Some(BRAND.palette.accent));
    assert!(pill.style().radius >= 500.0);
    match &pill.children()[0] {
        Node::Text(t) => {
            assert_eq!(t.text, "1 CLICK");
            assert_eq!(t.font.color, BRAND.palette.dark);
        }
        other => panic!("expected metric text, got {other:?}"),
    }
}

#[test]
fn trust_draws_shield_with_q() {
    let tree = build_scene(&config(Template::Trust, "ZERO ERRORS", "99%"));
    let shield_box = &tree.children()[0];
    match &shield_box.children()[0] {
        Node::Shape(s) => {
            assert_eq!(s.shape, Shape::Shield);
            assert_eq!(s.fill, BRAND.palette.primary);
            assert_eq!(s.stroke.map(|b| b.color), Some(BRAND.palette.accent));
        }
        other => panic!("expected shield, got {other:?}"),
    }
    assert!(shield_box.texts().contains(&"Q"));
    assert!(!tree.texts().contains(&"99%"));
}

#[test]
fn empty_headline_renders_only_subtext() {
    let tree = build_scene(&config(Template::Feature, "", ""));
    assert!(tree.texts().contains(&"INSURANCE QUOTING REIMAGINED"));
}

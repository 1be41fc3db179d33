use std::path::PathBuf;

use super::*;
use crate::analysis::{Template, ThumbnailConfig};
use crate::assets::fonts::FontAssets;
use crate::brand::BRAND;
use crate::scene::FontWeight;
use crate::templates::build_scene;

fn measurer() -> TextMeasurer {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    TextMeasurer::new(&FontAssets::load_dir(&dir).unwrap()).unwrap()
}

fn config(template: Template, headline: &str, metric: &str) -> ThumbnailConfig {
    ThumbnailConfig {
        template,
        headline: headline.to_string(),
        subtext: "INSURANCE QUOTING REIMAGINED".to_string(),
        metric: metric.to_string(),
        metric_label: "key metric".to_string(),
    }
}

fn items(template: Template, headline: &str, metric: &str) -> Vec<DrawItem> {
    let scene = build_scene(&config(template, headline, metric));
    layout_scene(&scene, BRAND.canvas, &mut measurer()).unwrap()
}

fn rects(items: &[DrawItem]) -> Vec<(RectPx, Option<Color>, f32)> {
    items
        .iter()
        .filter_map(|i| match i {
            DrawItem::Rect {
                rect, fill, radius, ..
            } => Some((*rect, *fill, *radius)),
            _ => None,
        })
        .collect()
}

fn text_rect(items: &[DrawItem], needle: &str) -> RectPx {
    items
        .iter()
        .find_map(|i| match i {
            DrawItem::Text { rect, text, .. } if text == needle => Some(*rect),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text item '{needle}'"))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.5
}

#[test]
fn bottom_bar_spans_canvas_bottom() {
    let items = items(Template::Feature, "HELLO", "");
    let bar = rects(&items)
        .into_iter()
        .find(|(_, fill, _)| *fill == Some(BRAND.palette.primary))
        .unwrap();
    assert!(close(bar.0.x, 0.0));
    assert!(close(bar.0.y, 640.0));
    assert!(close(bar.0.w, 1280.0));
    assert!(close(bar.0.h, 80.0));

    let mark = text_rect(&items, "QUOTELY");
    assert!(close(mark.x, 60.0));
    assert!(mark.y > 640.0 && mark.y + mark.h < 720.0);
    let site = text_rect(&items, "quotely.ai");
    assert!(close(site.x, mark.x + mark.w + 18.0));
}

#[test]
fn speed_badge_is_a_pinned_circle() {
    let items = items(Template::Speed, "QUOTE FASTER", "3X");
    let (rect, fill, radius) = rects(&items)[0];
    assert_eq!(fill, Some(BRAND.palette.red));
    assert!(close(rect.x, 1280.0 - 80.0 - 300.0));
    assert!(close(rect.y, 80.0));
    assert!(close(rect.w, 300.0) && close(rect.h, 300.0));
    assert!(close(radius, 150.0));

    let metric = text_rect(&items, "3X");
    assert!(close(metric.x + metric.w / 2.0, rect.x + 150.0));
}

#[test]
fn headline_position_depends_on_line_count() {
    let one = items(Template::Speed, "QUOTE FASTER", "3X");
    let r = text_rect(&one, "QUOTE FASTER");
    assert!(close(r.x, 60.0));
    assert!(close(r.y, 250.0));

    let two = items(Template::Speed, "QUOTE FASTER\nTHAN EZLYNX", "3X");
    let first = text_rect(&two, "QUOTE FASTER");
    let second = text_rect(&two, "THAN EZLYNX");
    assert!(close(first.y, 180.0));
    assert!(close(second.y, first.y + first.h + 4.0));
    let sub = text_rect(&two, "INSURANCE QUOTING REIMAGINED");
    assert!(close(sub.y, second.y + second.h + 4.0 + 14.0));
}

#[test]
fn comparison_panels_tile_the_upper_canvas() {
    let items = items(Template::Comparison, "", "");
    let r = rects(&items);
    let panel_w = (1280.0 - 12.0) / 2.0;
    assert!(close(r[0].0.x, 0.0) && close(r[0].0.w, panel_w));
    assert!(close(r[1].0.x, panel_w) && close(r[1].0.w, 12.0));
    assert_eq!(r[1].1, Some(BRAND.palette.red));
    assert!(close(r[2].0.x, panel_w + 12.0));
    for (rect, _, _) in &r[..3] {
        assert!(close(rect.h, 640.0));
    }
}

#[test]
fn feature_pill_hugs_its_content() {
    let items = items(Template::Feature, "NEW", "1 CLICK");
    let (pill, fill, radius) = rects(&items)[0];
    assert_eq!(fill, Some(BRAND.palette.accent));
    assert!(close(pill.x + pill.w, 1280.0 - 80.0));
    assert!(close(radius, pill.w.min(pill.h) / 2.0));
    let metric = text_rect(&items, "1 CLICK");
    assert!(pill.w >= metric.w + 2.0 * 56.0 - 0.5);
}

#[test]
fn trust_shield_fills_its_box() {
    let items = items(Template::Trust, "ZERO ERRORS", "");
    let shield = items
        .iter()
        .find_map(|i| match i {
            DrawItem::Shape { rect, shape, .. } => Some((*rect, *shape)),
            _ => None,
        })
        .unwrap();
    assert_eq!(shield.1, Shape::Shield);
    assert!(close(shield.0.w, 260.0) && close(shield.0.h, 300.0));
    assert!(close(shield.0.x, 1280.0 - 100.0 - 260.0));
}

#[test]
fn paint_order_follows_tree_order() {
    let scene = build_scene(&config(Template::Speed, "A\nB", "3X"));
    let items = layout_scene(&scene, BRAND.canvas, &mut measurer()).unwrap();
    let texts: Vec<&str> = items
        .iter()
        .filter_map(|i| match i {
            DrawItem::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, scene.texts());
}

#[test]
fn radius_is_clamped_to_half_the_short_side() {
    let node = Node::boxed(
        Style::new().size(Dim::Px(1280.0), Dim::Px(720.0)),
        vec![Node::boxed(
            Style::new()
                .size(Dim::Px(100.0), Dim::Px(40.0))
                .fill(BRAND.palette.red)
                .radius(999.0),
            Vec::new(),
        )],
    );
    let items = layout_scene(&node, BRAND.canvas, &mut measurer()).unwrap();
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], DrawItem::Rect { radius, .. } if close(radius, 20.0)));
}

#[test]
fn text_leaf_takes_measured_size() {
    let mut m = measurer();
    let font = TextStyle::new(FontWeight::Black, 76.0, BRAND.palette.white);
    let extent = m.measure("QUOTE", &font).unwrap();
    let node = Node::boxed(
        Style::new().size(Dim::Px(1280.0), Dim::Px(720.0)),
        vec![Node::text("QUOTE", font)],
    );
    let items = layout_scene(&node, BRAND.canvas, &mut m).unwrap();
    let r = text_rect(&items, "QUOTE");
    assert!(close(r.w, extent.width));
    assert!(close(r.h, extent.height));
}

fn intersects(a: RectPx, b: RectPx) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

#[test]
fn longest_single_line_headline_clears_every_badge() {
    let analysis = crate::analysis::heuristic_analysis("Fast Quote Win Deals in 24 seconds");
    assert_eq!(analysis.headline, "FAST QUOTE WIN DEALS");
    assert_eq!(analysis.metric, "24");

    for template in [
        Template::Speed,
        Template::Conversion,
        Template::Feature,
        Template::Trust,
    ] {
        let mut cfg = analysis.config();
        cfg.template = template;
        let items = layout_scene(&build_scene(&cfg), BRAND.canvas, &mut measurer()).unwrap();

        let headline = text_rect(&items, "FAST QUOTE WIN DEALS");
        let subtext = text_rect(&items, "INSURANCE QUOTING REIMAGINED");
        assert!(headline.x + headline.w <= 60.0 + 780.0 + 0.5, "{template}: {headline:?}");

        let badges: Vec<RectPx> = items
            .iter()
            .filter_map(|i| match i {
                DrawItem::Rect { rect, .. } | DrawItem::Shape { rect, .. } => Some(*rect),
                DrawItem::Text { .. } => None,
            })
            .filter(|r| r.x >= 640.0 && r.y < 640.0)
            .collect();
        assert!(!badges.is_empty(), "{template}: no badge");
        for badge in badges {
            assert!(!intersects(headline, badge), "{template}: {headline:?} / {badge:?}");
            assert!(!intersects(subtext, badge), "{template}: {subtext:?} / {badge:?}");
        }
    }
}

#[test]
fn fitted_text_is_drawn_smaller_than_requested() {
    let long = items_font(
        &items(Template::Speed, "FAST QUOTE WIN DEALS", "24"),
        "FAST QUOTE WIN DEALS",
    );
    assert!(long.size < 76.0, "{long:?}");
    assert!(long.letter_spacing < 2.0);

    let short = items_font(&items(Template::Speed, "QUOTE FASTER", "3X"), "QUOTE FASTER");
    assert!(close(short.size, 76.0));
}

fn items_font(items: &[DrawItem], needle: &str) -> TextStyle {
    items
        .iter()
        .find_map(|i| match i {
            DrawItem::Text { text, font, .. } if text == needle => Some(*font),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text item '{needle}'"))
}

use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::foundation::core::Color;
use crate::scene::{Align, Dim, Edges, FontWeight, Node, Style, TextStyle};

pub(crate) const MARGIN_X: f32 = 60.0;
pub(crate) const BAR_HEIGHT: f32 = 80.0;
pub(crate) const BADGE_INSET: f32 = 80.0;

/// Widest the headline and subtext may be drawn. The widest badge column starts at x = 900,
/// so text ending at `MARGIN_X + TEXT_MAX_WIDTH` keeps a 60 px gutter before it.
pub(crate) const TEXT_MAX_WIDTH: f32 = 780.0;

const HEADLINE_SIZE: f32 = 76.0;
const HEADLINE_SPACING: f32 = 2.0;
const SUBTEXT_SIZE: f32 = 30.0;
const HEADLINE_TOP_ONE_LINE: f32 = 250.0;
const HEADLINE_TOP_TWO_LINES: f32 = 180.0;

/// Full-canvas root box.
pub(crate) fn root(children: Vec<Node>) -> Node {
    Node::boxed(
        Style::new().size(
            Dim::Px(BRAND.canvas.width_f32()),
            Dim::Px(BRAND.canvas.height_f32()),
        ),
        children,
    )
}

/// Brand bar pinned to the bottom edge: wordmark + site label.
pub(crate) fn bottom_bar() -> Node {
    let p = BRAND.palette;
    Node::boxed(
        Style::absolute()
            .left(0.0)
            .bottom(0.0)
            .size(Dim::Percent(1.0), Dim::Px(BAR_HEIGHT))
            .align(Align::Center)
            .gap(18.0)
            .padding(Edges {
                left: MARGIN_X,
                ..Edges::default()
            })
            .fill(p.primary),
        vec![
            Node::text(
                BRAND.wordmark,
                TextStyle::new(FontWeight::Black, 34.0, p.white).spacing(3.0),
            ),
            Node::text(
                BRAND.site_label,
                TextStyle::new(FontWeight::Bold, 24.0, p.light_gray),
            ),
        ],
    )
}

/// Left-aligned headline lines followed by the subtext.
///
/// Two-line headlines start higher so the block stays balanced above the bar. Lines wider
/// than [`TEXT_MAX_WIDTH`] are shrunk at layout time.
pub(crate) fn headline_block(config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let lines = config.headline_lines();
    let top = if lines.len() > 1 {
        HEADLINE_TOP_TWO_LINES
    } else {
        HEADLINE_TOP_ONE_LINE
    };

    let headline_font = TextStyle::new(FontWeight::Black, HEADLINE_SIZE, p.white)
        .spacing(HEADLINE_SPACING)
        .fit_width(TEXT_MAX_WIDTH);
    let mut children: Vec<Node> = lines
        .into_iter()
        .map(|line| Node::text(line, headline_font))
        .collect();

    if !config.subtext.is_empty() {
        children.push(Node::styled_text(
            Style::new().margin(Edges {
                top: 14.0,
                ..Edges::default()
            }),
            config.subtext.as_str(),
            TextStyle::new(FontWeight::Bold, SUBTEXT_SIZE, p.accent)
                .spacing(1.5)
                .fit_width(TEXT_MAX_WIDTH),
        ));
    }

    Node::boxed(
        Style::absolute().left(MARGIN_X).top(top).column().gap(4.0),
        children,
    )
}

/// Metric font size shrinking with the metric's length so it fits its badge.
pub(crate) fn metric_size(metric: &str) -> f32 {
    match metric.chars().count() {
        0..=3 => 104.0,
        4..=5 => 80.0,
        _ => 60.0,
    }
}

/// Metric text plus its label, if any.
pub(crate) fn metric_texts(config: &ThumbnailConfig, color: Color, label_size: f32) -> Vec<Node> {
    let mut out = vec![Node::text(
        config.metric.as_str(),
        TextStyle::new(FontWeight::Black, metric_size(&config.metric), color),
    )];
    if !config.metric_label.is_empty() {
        out.push(Node::text(
            config.metric_label.as_str(),
            TextStyle::new(FontWeight::Bold, label_size, color).spacing(1.0),
        ));
    }
    out
}

/// Headline block and bottom bar around template-specific decorations.
///
/// Decorations are painted first so the headline always sits on top.
pub(crate) fn standard_layout(config: &ThumbnailConfig, decorations: Vec<Node>) -> Node {
    let mut children = decorations;
    children.push(headline_block(config));
    children.push(bottom_bar());
    root(children)
}

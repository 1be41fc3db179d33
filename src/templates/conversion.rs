use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::scene::{Dim, Edges, Node, Style};
use crate::templates::shared::{BADGE_INSET, metric_texts, standard_layout};

const URGENCY_BAR_WIDTH: f32 = 14.0;

pub(crate) fn build(config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let mut decorations = vec![Node::boxed(
        Style::absolute()
            .top(0.0)
            .left(0.0)
            .size(Dim::Px(URGENCY_BAR_WIDTH), Dim::Percent(1.0))
            .fill(p.red),
        Vec::new(),
    )];

    if !config.metric.is_empty() {
        decorations.push(Node::boxed(
            Style::absolute()
                .top(BADGE_INSET + 10.0)
                .right(BADGE_INSET)
                .column()
                .center()
                .gap(6.0)
                .padding(Edges::symmetric(28.0, 44.0))
                .fill(p.red)
                .radius(28.0),
            metric_texts(config, p.white, 24.0),
        ));
    }
    standard_layout(config, decorations)
}

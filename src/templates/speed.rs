use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::scene::{Dim, Node, Style};
use crate::templates::shared::{BADGE_INSET, metric_texts, standard_layout};

const BADGE_DIAMETER: f32 = 300.0;

pub(crate) fn build(config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let mut decorations = Vec::new();
    if !config.metric.is_empty() {
        decorations.push(Node::boxed(
            Style::absolute()
                .top(BADGE_INSET)
                .right(BADGE_INSET)
                .size(Dim::Px(BADGE_DIAMETER), Dim::Px(BADGE_DIAMETER))
                .column()
                .center()
                .gap(4.0)
                .fill(p.red)
                .border(6.0, p.white.with_alpha(64))
                .radius(BADGE_DIAMETER / 2.0),
            metric_texts(config, p.white, 24.0),
        ));
    }
    standard_layout(config, decorations)
}

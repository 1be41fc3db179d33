use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::scene::{Edges, Node, Style};
use crate::templates::shared::{BADGE_INSET, metric_texts, standard_layout};

pub(crate) fn build(config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let mut decorations = Vec::new();
    if !config.metric.is_empty() {
        // Radius larger than any badge height renders as a full pill.
        decorations.push(Node::boxed(
            Style::absolute()
                .top(BADGE_INSET + 20.0)
                .right(BADGE_INSET)
                .column()
                .center()
                .gap(2.0)
                .padding(Edges::symmetric(26.0, 56.0))
                .fill(p.accent)
                .radius(999.0),
            metric_texts(config, p.dark, 22.0),
        ));
    }
    standard_layout(config, decorations)
}

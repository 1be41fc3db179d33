use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::scene::{Border, Dim, Edges, FontWeight, Node, Shape, Style, TextStyle};
use crate::templates::shared::{BADGE_INSET, standard_layout};

const SHIELD_WIDTH: f32 = 260.0;
const SHIELD_HEIGHT: f32 = 300.0;

pub(crate) fn build(config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let shield = Node::boxed(
        Style::absolute()
            .top(BADGE_INSET - 10.0)
            .right(BADGE_INSET + 20.0)
            .size(Dim::Px(SHIELD_WIDTH), Dim::Px(SHIELD_HEIGHT))
            .center(),
        vec![
            Node::shape(
                Style::absolute()
                    .top(0.0)
                    .left(0.0)
                    .size(Dim::Percent(1.0), Dim::Percent(1.0)),
                Shape::Shield,
                p.primary,
                Some(Border {
                    width: 8.0,
                    color: p.accent,
                }),
            ),
            // Nudged up: the shield's visual centre sits above its box centre.
            Node::styled_text(
                Style::new().margin(Edges {
                    bottom: 30.0,
                    ..Edges::default()
                }),
                "Q",
                TextStyle::new(FontWeight::Black, 170.0, p.white),
            ),
        ],
    );
    standard_layout(config, vec![shield])
}

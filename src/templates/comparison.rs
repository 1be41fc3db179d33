use crate::analysis::ThumbnailConfig;
use crate::brand::BRAND;
use crate::foundation::core::Color;
use crate::scene::{Dim, FontWeight, Node, Style, TextStyle};
use crate::templates::shared::{BAR_HEIGHT, bottom_bar, root};

const DIVIDER_WIDTH: f32 = 12.0;

struct PanelCopy {
    name: &'static str,
    time: &'static str,
    detail: &'static str,
}

// Fixed competitive copy; the config's headline and metric fields are not consulted.
const OURS: PanelCopy = PanelCopy {
    name: "QUOTELY",
    time: "2 MIN",
    detail: "15 carriers, instant",
};
const THEIRS: PanelCopy = PanelCopy {
    name: "APPLIED SYSTEMS",
    time: "15 MIN",
    detail: "manual, per-carrier",
};

pub(crate) fn build(_config: &ThumbnailConfig) -> Node {
    let p = BRAND.palette;
    let panel_w = (BRAND.canvas.width_f32() - DIVIDER_WIDTH) / 2.0;
    let panels_h = BRAND.canvas.height_f32() - BAR_HEIGHT;

    let panels = Node::boxed(
        Style::absolute()
            .top(0.0)
            .left(0.0)
            .size(Dim::Percent(1.0), Dim::Px(panels_h)),
        vec![
            panel(&OURS, panel_w, p.primary, p.white, p.white),
            Node::boxed(
                Style::new()
                    .size(Dim::Px(DIVIDER_WIDTH), Dim::Percent(1.0))
                    .fill(p.red),
                Vec::new(),
            ),
            panel(&THEIRS, panel_w, p.dark, p.light_gray, p.red),
        ],
    );

    root(vec![panels, bottom_bar()])
}

fn panel(copy: &PanelCopy, width: f32, fill: Color, text: Color, emphasis: Color) -> Node {
    Node::boxed(
        Style::new()
            .size(Dim::Px(width), Dim::Percent(1.0))
            .column()
            .center()
            .gap(10.0)
            .fill(fill),
        vec![
            Node::text(
                copy.name,
                TextStyle::new(FontWeight::Bold, 40.0, text).spacing(4.0),
            ),
            Node::text(copy.time, TextStyle::new(FontWeight::Black, 120.0, emphasis)),
            Node::text(copy.detail, TextStyle::new(FontWeight::Bold, 30.0, text)),
        ],
    )
}

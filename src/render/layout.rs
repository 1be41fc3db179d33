use taffy::prelude::{AvailableSpace, NodeId, Rect, Size};
use taffy::style::{
    AlignItems, Dimension, FlexDirection, JustifyContent, LengthPercentage, LengthPercentageAuto,
    Position as TaffyPosition, Style as TaffyStyle,
};

use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::ThumbResult;
use crate::render::text::TextMeasurer;
use crate::scene::{Align, Border, Dim, Direction, Node, Position, Shape, Style, TextStyle};

/// Absolute pixel rectangle on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct RectPx {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) w: f32,
    pub(crate) h: f32,
}

/// One paint operation with resolved absolute geometry.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawItem {
    /// Box background and/or border. `radius` is already clamped to the box.
    Rect {
        rect: RectPx,
        fill: Option<Color>,
        border: Option<Border>,
        radius: f32,
    },
    /// Single text line occupying `rect`.
    Text {
        rect: RectPx,
        text: String,
        font: TextStyle,
    },
    /// Vector shape scaled into `rect`.
    Shape {
        rect: RectPx,
        shape: Shape,
        fill: Color,
        stroke: Option<Border>,
    },
}

/// Text leaf context: the style after width fitting and its measured extent.
#[derive(Clone, Copy, Debug)]
struct FittedText {
    font: TextStyle,
    extent: Size<f32>,
}

/// Lay `root` out on `canvas` and flatten it into draw items in paint order
/// (parents before children, siblings in declaration order).
pub(crate) fn layout_scene(
    root: &Node,
    canvas: Canvas,
    measurer: &mut TextMeasurer,
) -> ThumbResult<Vec<DrawItem>> {
    let mut taffy = taffy::TaffyTree::<FittedText>::new();
    let root_id = build_subtree(&mut taffy, root, measurer)?;

    let available = Size {
        width: AvailableSpace::Definite(canvas.width_f32()),
        height: AvailableSpace::Definite(canvas.height_f32()),
    };
    taffy.compute_layout_with_measure(
        root_id,
        available,
        |known_dimensions, _available_space, _node_id, node_context, _style| {
            let intrinsic = node_context.map_or(Size::ZERO, |c| c.extent);
            known_dimensions.unwrap_or(intrinsic)
        },
    )?;

    let mut out = Vec::with_capacity(root.count());
    emit(&taffy, root, root_id, 0.0, 0.0, &mut out)?;
    tracing::debug!(items = out.len(), "laid out overlay scene");
    Ok(out)
}

fn build_subtree(
    taffy: &mut taffy::TaffyTree<FittedText>,
    node: &Node,
    measurer: &mut TextMeasurer,
) -> ThumbResult<NodeId> {
    let style = taffy_style(node.style());
    let nid = match node {
        Node::Box(b) => {
            let mut children = Vec::with_capacity(b.children.len());
            for c in &b.children {
                children.push(build_subtree(taffy, c, measurer)?);
            }
            if children.is_empty() {
                taffy.new_leaf(style)?
            } else {
                taffy.new_with_children(style, &children)?
            }
        }
        Node::Text(t) => {
            let (font, extent) = measurer.fit(&t.text, &t.font)?;
            taffy.new_leaf_with_context(
                style,
                FittedText {
                    font,
                    extent: Size {
                        width: extent.width,
                        height: extent.height,
                    },
                },
            )?
        }
        Node::Shape(_) => taffy.new_leaf(style)?,
    };
    Ok(nid)
}

fn emit(
    taffy: &taffy::TaffyTree<FittedText>,
    node: &Node,
    nid: NodeId,
    origin_x: f32,
    origin_y: f32,
    out: &mut Vec<DrawItem>,
) -> ThumbResult<()> {
    let l = taffy.layout(nid)?;
    let rect = RectPx {
        x: origin_x + l.location.x,
        y: origin_y + l.location.y,
        w: l.size.width,
        h: l.size.height,
    };

    match node {
        Node::Box(b) => {
            if b.style.background.is_some() || b.style.border.is_some() {
                out.push(DrawItem::Rect {
                    rect,
                    fill: b.style.background,
                    border: b.style.border,
                    radius: b.style.radius.clamp(0.0, rect.w.min(rect.h) / 2.0),
                });
            }
            let child_ids = taffy.children(nid)?;
            for (c, cid) in b.children.iter().zip(child_ids) {
                emit(taffy, c, cid, rect.x, rect.y, out)?;
            }
        }
        Node::Text(t) => out.push(DrawItem::Text {
            rect,
            text: t.text.clone(),
            font: taffy.get_node_context(nid).map_or(t.font, |c| c.font),
        }),
        Node::Shape(s) => out.push(DrawItem::Shape {
            rect,
            shape: s.shape,
            fill: s.fill,
            stroke: s.stroke,
        }),
    }
    Ok(())
}

fn taffy_style(s: &Style) -> TaffyStyle {
    TaffyStyle {
        position: match s.position {
            Position::Relative => TaffyPosition::Relative,
            Position::Absolute => TaffyPosition::Absolute,
        },
        inset: Rect {
            left: inset_side(s.inset.left),
            right: inset_side(s.inset.right),
            top: inset_side(s.inset.top),
            bottom: inset_side(s.inset.bottom),
        },
        size: Size {
            width: dimension(s.width),
            height: dimension(s.height),
        },
        flex_direction: match s.direction {
            Direction::Row => FlexDirection::Row,
            Direction::Column => FlexDirection::Column,
        },
        justify_content: Some(match s.justify {
            Align::Start => JustifyContent::Start,
            Align::Center => JustifyContent::Center,
            Align::End => JustifyContent::End,
            Align::SpaceBetween => JustifyContent::SpaceBetween,
        }),
        // Cross-axis has no "between"; it packs at the start like `Start`.
        align_items: Some(match s.align {
            Align::Start | Align::SpaceBetween => AlignItems::Start,
            Align::Center => AlignItems::Center,
            Align::End => AlignItems::End,
        }),
        gap: Size {
            width: LengthPercentage::length(s.gap.max(0.0)),
            height: LengthPercentage::length(s.gap.max(0.0)),
        },
        padding: Rect {
            left: LengthPercentage::length(s.padding.left.max(0.0)),
            right: LengthPercentage::length(s.padding.right.max(0.0)),
            top: LengthPercentage::length(s.padding.top.max(0.0)),
            bottom: LengthPercentage::length(s.padding.bottom.max(0.0)),
        },
        margin: Rect {
            left: LengthPercentageAuto::length(s.margin.left),
            right: LengthPercentageAuto::length(s.margin.right),
            top: LengthPercentageAuto::length(s.margin.top),
            bottom: LengthPercentageAuto::length(s.margin.bottom),
        },
        flex_grow: s.grow.max(0.0),
        // Text never shrinks below its measured extent.
        flex_shrink: 0.0,
        ..TaffyStyle::default()
    }
}

fn inset_side(v: Option<f32>) -> LengthPercentageAuto {
    match v {
        Some(px) => LengthPercentageAuto::length(px),
        None => LengthPercentageAuto::auto(),
    }
}

fn dimension(d: Dim) -> Dimension {
    match d {
        Dim::Auto => Dimension::auto(),
        Dim::Px(px) => Dimension::length(px),
        Dim::Percent(f) => Dimension::percent(f),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;

//! Declarative visual tree produced by the templates and consumed by the overlay renderer.
//!
//! The model is a small flexbox subset: boxes with children, text leaves and vector shape
//! leaves. It carries no rasterization types so templates stay independent of the renderer.

use serde::Serialize;

use crate::brand::BRAND;
use crate::foundation::core::Color;

/// Display font weight. Each maps to one of the two loaded font assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Bold (700), drawn with the condensed bold face.
    Bold,
    /// Heaviest display weight, requested as 900 and drawn with the wide bold face.
    Black,
}

impl FontWeight {
    /// CSS numeric weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }

    /// Brand family name for this weight.
    pub fn family(self) -> &'static str {
        match self {
            FontWeight::Bold => BRAND.fonts.bold,
            FontWeight::Black => BRAND.fonts.black,
        }
    }
}

/// Layout positioning scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Participates in the parent's flex flow.
    #[default]
    Relative,
    /// Placed by `inset` relative to the parent box.
    Absolute,
}

/// Main axis of a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Children laid out horizontally.
    #[default]
    Row,
    /// Children laid out vertically.
    Column,
}

/// Main-axis and cross-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    /// Pack at the start.
    #[default]
    Start,
    /// Centre.
    Center,
    /// Pack at the end.
    End,
    /// Distribute free space between children (main axis only).
    SpaceBetween,
}

/// Box dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Dim {
    /// Sized by content.
    #[default]
    Auto,
    /// Fixed pixels.
    Px(f32),
    /// Fraction of the parent, `1.0` = 100%.
    Percent(f32),
}

/// Four-sided pixel lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Edges {
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Left edge.
    pub left: f32,
}

impl Edges {
    /// Same length on every side.
    pub const fn all(v: f32) -> Self {
        Self::symmetric(v, v)
    }

    /// `vertical` on top/bottom, `horizontal` on left/right.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Offsets of an absolutely positioned box. `None` sides are unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Inset {
    /// Offset from the parent's top edge.
    pub top: Option<f32>,
    /// Offset from the parent's right edge.
    pub right: Option<f32>,
    /// Offset from the parent's bottom edge.
    pub bottom: Option<f32>,
    /// Offset from the parent's left edge.
    pub left: Option<f32>,
}

/// Solid border drawn inside the box edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke colour.
    pub color: Color,
}

/// Box style: flexbox layout plus paint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Style {
    /// Positioning scheme.
    pub position: Position,
    /// Absolute offsets.
    pub inset: Inset,
    /// Width.
    pub width: Dim,
    /// Height.
    pub height: Dim,
    /// Flex main axis.
    pub direction: Direction,
    /// Main-axis distribution.
    pub justify: Align,
    /// Cross-axis alignment.
    pub align: Align,
    /// Gap between children along the main axis.
    pub gap: f32,
    /// Inner padding.
    pub padding: Edges,
    /// Outer margin.
    pub margin: Edges,
    /// Flex grow factor.
    pub grow: f32,
    /// Background fill.
    pub background: Option<Color>,
    /// Border.
    pub border: Option<Border>,
    /// Corner radius; clamped to half the shorter side when painted.
    pub radius: f32,
}

impl Style {
    /// Default (relative, row, auto-sized) style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolutely positioned style.
    pub fn absolute() -> Self {
        Self {
            position: Position::Absolute,
            ..Self::default()
        }
    }

    /// Set the top inset.
    pub fn top(mut self, v: f32) -> Self {
        self.inset.top = Some(v);
        self
    }

    /// Set the right inset.
    pub fn right(mut self, v: f32) -> Self {
        self.inset.right = Some(v);
        self
    }

    /// Set the bottom inset.
    pub fn bottom(mut self, v: f32) -> Self {
        self.inset.bottom = Some(v);
        self
    }

    /// Set the left inset.
    pub fn left(mut self, v: f32) -> Self {
        self.inset.left = Some(v);
        self
    }

    /// Set width and height.
    pub fn size(mut self, width: Dim, height: Dim) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set width.
    pub fn width(mut self, width: Dim) -> Self {
        self.width = width;
        self
    }

    /// Set height.
    pub fn height(mut self, height: Dim) -> Self {
        self.height = height;
        self
    }

    /// Lay children out vertically.
    pub fn column(mut self) -> Self {
        self.direction = Direction::Column;
        self
    }

    /// Centre children on both axes.
    pub fn center(mut self) -> Self {
        self.justify = Align::Center;
        self.align = Align::Center;
        self
    }

    /// Set main-axis distribution.
    pub fn justify(mut self, a: Align) -> Self {
        self.justify = a;
        self
    }

    /// Set cross-axis alignment.
    pub fn align(mut self, a: Align) -> Self {
        self.align = a;
        self
    }

    /// Set the gap between children.
    pub fn gap(mut self, v: f32) -> Self {
        self.gap = v;
        self
    }

    /// Set padding.
    pub fn padding(mut self, e: Edges) -> Self {
        self.padding = e;
        self
    }

    /// Set margin.
    pub fn margin(mut self, e: Edges) -> Self {
        self.margin = e;
        self
    }

    /// Set the flex grow factor.
    pub fn grow(mut self, v: f32) -> Self {
        self.grow = v;
        self
    }

    /// Fill the background.
    pub fn fill(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    /// Add a border.
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    /// Round the corners.
    pub fn radius(mut self, r: f32) -> Self {
        self.radius = r;
        self
    }
}

/// Text paint and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font weight (selects the font asset).
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size: f32,
    /// Fill colour.
    pub color: Color,
    /// Extra advance after every character, in pixels.
    pub letter_spacing: f32,
    /// Widest the line may be drawn; size and spacing shrink together until it fits.
    pub max_width: Option<f32>,
}

impl TextStyle {
    /// Text style without letter spacing.
    pub fn new(weight: FontWeight, size: f32, color: Color) -> Self {
        Self {
            weight,
            size,
            color,
            letter_spacing: 0.0,
            max_width: None,
        }
    }

    /// Set letter spacing.
    pub fn spacing(mut self, v: f32) -> Self {
        self.letter_spacing = v;
        self
    }

    /// Cap the drawn width of the line at `v` pixels.
    pub fn fit_width(mut self, v: f32) -> Self {
        self.max_width = Some(v);
        self
    }
}

/// Vector shapes the renderer knows how to draw into a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Flat-topped badge with rounded shoulders narrowing to a point at the bottom.
    Shield,
}

/// Container node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxNode {
    /// Layout and paint.
    pub style: Style,
    /// Children in paint order.
    pub children: Vec<Node>,
}

/// Single-line text leaf.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextNode {
    /// Layout (sizes come from text measurement).
    pub style: Style,
    /// Text content.
    pub text: String,
    /// Font and paint.
    pub font: TextStyle,
}

/// Vector shape leaf, scaled to its layout box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeNode {
    /// Layout.
    pub style: Style,
    /// Which shape.
    pub shape: Shape,
    /// Fill colour.
    pub fill: Color,
    /// Optional outline.
    pub stroke: Option<Border>,
}

/// A node of the visual tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Container.
    Box(BoxNode),
    /// Text leaf.
    Text(TextNode),
    /// Shape leaf.
    Shape(ShapeNode),
}

impl Node {
    /// Container node.
    pub fn boxed(style: Style, children: Vec<Node>) -> Self {
        Node::Box(BoxNode { style, children })
    }

    /// Text leaf in normal flow.
    pub fn text(text: impl Into<String>, font: TextStyle) -> Self {
        Self::styled_text(Style::new(), text, font)
    }

    /// Text leaf with explicit layout style.
    pub fn styled_text(style: Style, text: impl Into<String>, font: TextStyle) -> Self {
        Node::Text(TextNode {
            style,
            text: text.into(),
            font,
        })
    }

    /// Shape leaf.
    pub fn shape(style: Style, shape: Shape, fill: Color, stroke: Option<Border>) -> Self {
        Node::Shape(ShapeNode {
            style,
            shape,
            fill,
            stroke,
        })
    }

    /// Layout style of any node kind.
    pub fn style(&self) -> &Style {
        match self {
            Node::Box(b) => &b.style,
            Node::Text(t) => &t.style,
            Node::Shape(s) => &s.style,
        }
    }

    /// Children; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Box(b) => &b.children,
            Node::Text(_) | Node::Shape(_) => &[],
        }
    }

    /// Depth-first pre-order walk.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for c in self.children() {
            c.walk(f);
        }
    }

    /// All text contents in paint order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Text(t) = n {
                out.push(t.text.as_str());
            }
        });
        out
    }

    /// Total node count including `self`.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene/scene.rs"]
mod tests;

use std::fmt::Write as _;

use kurbo::BezPath;

use crate::foundation::core::{Canvas, Color};
use crate::render::layout::{DrawItem, RectPx};
use crate::scene::{Border, Shape, TextStyle};

/// Serialize laid-out draw items as a standalone SVG document sized to `canvas`.
///
/// Text is positioned by the centre of its measured box with `dominant-baseline="central"`,
/// which keeps glyphs vertically centred regardless of the face's ascent/descent split.
pub(crate) fn scene_svg(items: &[DrawItem], canvas: Canvas) -> String {
    let mut out = String::with_capacity(256 + items.len() * 160);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    for item in items {
        match item {
            DrawItem::Rect {
                rect,
                fill,
                border,
                radius,
            } => write_rect(&mut out, *rect, *fill, *border, *radius),
            DrawItem::Text { rect, text, font } => write_text(&mut out, *rect, text, font),
            DrawItem::Shape {
                rect,
                shape,
                fill,
                stroke,
            } => write_shape(&mut out, *rect, *shape, *fill, *stroke),
        }
    }
    out.push_str("</svg>");
    out
}

fn write_rect(
    out: &mut String,
    r: RectPx,
    fill: Option<Color>,
    border: Option<Border>,
    radius: f32,
) {
    if let Some(fill) = fill {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"{}/>"#,
            num(r.x),
            num(r.y),
            num(r.w),
            num(r.h),
            num(radius),
            num(radius),
            paint("fill", fill)
        );
    }
    if let Some(b) = border {
        // Strokes straddle the path; inset by half the width to keep the border inside the box.
        let half = b.width / 2.0;
        let rr = (radius - half).max(0.0);
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="none" stroke-width="{}"{}/>"#,
            num(r.x + half),
            num(r.y + half),
            num((r.w - b.width).max(0.0)),
            num((r.h - b.width).max(0.0)),
            num(rr),
            num(rr),
            num(b.width),
            paint("stroke", b.color)
        );
    }
}

fn write_text(out: &mut String, r: RectPx, text: &str, font: &TextStyle) {
    if text.is_empty() {
        return;
    }
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-family="{}" font-weight="{}" font-size="{}""#,
        num(r.x),
        num(r.y + r.h / 2.0),
        escape_xml(font.weight.family()),
        font.weight.css_weight(),
        num(font.size)
    );
    if font.letter_spacing != 0.0 {
        let _ = write!(out, r#" letter-spacing="{}""#, num(font.letter_spacing));
    }
    let _ = write!(
        out,
        r#" dominant-baseline="central" xml:space="preserve"{}>{}</text>"#,
        paint("fill", font.color),
        escape_xml(text)
    );
}

fn write_shape(out: &mut String, r: RectPx, shape: Shape, fill: Color, stroke: Option<Border>) {
    let inset = stroke.map_or(0.0, |b| b.width / 2.0);
    let inner = RectPx {
        x: r.x + inset,
        y: r.y + inset,
        w: (r.w - 2.0 * inset).max(0.0),
        h: (r.h - 2.0 * inset).max(0.0),
    };
    let path = match shape {
        Shape::Shield => shield_path(inner),
    };
    let _ = write!(out, r#"<path d="{}"{}"#, path.to_svg(), paint("fill", fill));
    if let Some(b) = stroke {
        let _ = write!(
            out,
            r#" stroke-width="{}" stroke-linejoin="round"{}"#,
            num(b.width),
            paint("stroke", b.color)
        );
    }
    out.push_str("/>");
}

/// Flat top with rounded shoulders, straight sides to just past mid-height, then two
/// curves meeting at a point on the bottom centre.
pub(crate) fn shield_path(r: RectPx) -> BezPath {
    let (x, y, w, h) = (f64::from(r.x), f64::from(r.y), f64::from(r.w), f64::from(r.h));
    let shoulder = w * 0.12;
    let mid = x + w * 0.5;
    let side_end = y + h * 0.55;

    let mut p = BezPath::new();
    p.move_to((x + shoulder, y));
    p.line_to((x + w - shoulder, y));
    p.quad_to((x + w, y), (x + w, y + shoulder));
    p.line_to((x + w, side_end));
    p.curve_to((x + w, y + h * 0.8), (mid + w * 0.2, y + h * 0.93), (mid, y + h));
    p.curve_to((mid - w * 0.2, y + h * 0.93), (x, y + h * 0.8), (x, side_end));
    p.line_to((x, y + shoulder));
    p.quad_to((x, y), (x + shoulder, y));
    p.close_path();
    p
}

/// ` fill="#rrggbb"` plus an opacity attribute when the colour is translucent.
fn paint(attr: &str, c: Color) -> String {
    if c.a == 255 {
        format!(r#" {attr}="{}""#, c.svg_rgb())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            c.svg_rgb(),
            num(c.svg_opacity())
        )
    }
}

fn num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

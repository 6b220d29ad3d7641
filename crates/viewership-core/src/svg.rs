// File: crates/viewership-core/src/svg.rs
// Summary: SVG serialization of a Scene; tooltips become <title> children.

use std::fmt::Write;

use crate::color::Rgba;
use crate::format::coord;
use crate::scene::{Item, Role, Scene, Shape};

pub fn to_svg(scene: &Scene) -> String {
    let mut svg = String::with_capacity(16 * 1024);
    let (w, h) = (scene.width, scene.height);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    );
    for item in &scene.items {
        write_item(&mut svg, item);
    }
    svg.push_str("</svg>\n");
    svg
}

fn write_item(out: &mut String, item: &Item) {
    let _ = write!(out, r#"  <{} class="{}""#, element(&item.shape), role_class(item.role));
    if let Some(t) = &item.tooltip {
        let _ = write!(out, r#" data-tooltip="{}""#, t.kind.css_class());
    }

    match &item.shape {
        Shape::Rect { x, y, width, height, fill } => {
            let _ = write!(
                out,
                r#" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                coord(*x), coord(*y), coord(*width), coord(*height), fill.to_hex()
            );
            write_opacity(out, "fill-opacity", fill);
        }
        Shape::Line { x1, y1, x2, y2, stroke, width, dash } => {
            let _ = write!(
                out,
                r#" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                coord(*x1), coord(*y1), coord(*x2), coord(*y2), stroke.to_hex(), coord(*width)
            );
            write_opacity(out, "stroke-opacity", stroke);
            if let Some([on, off]) = dash {
                let _ = write!(out, r#" stroke-dasharray="{}, {}""#, coord(*on), coord(*off));
            }
        }
        Shape::Text { x, y, size_pt, fill, anchor, rotate, .. } => {
            match rotate {
                Some(deg) => {
                    let _ = write!(
                        out,
                        r#" transform="translate({}, {}) rotate({})""#,
                        coord(*x), coord(*y), coord(*deg)
                    );
                }
                None => {
                    let _ = write!(out, r#" x="{}" y="{}""#, coord(*x), coord(*y));
                }
            }
            let _ = write!(
                out,
                r#" font-size="{}pt" fill="{}" text-anchor="{}""#,
                coord(*size_pt), fill.to_hex(), anchor.as_svg()
            );
            write_opacity(out, "fill-opacity", fill);
        }
    }

    let body = match &item.shape {
        Shape::Text { content, .. } => Some(escape(content)),
        _ => None,
    };
    let title = item.tooltip.as_ref().map(|t| format!("<title>{}</title>", escape(&t.text)));
    match (body, title) {
        (None, None) => out.push_str("/>\n"),
        (body, title) => {
            let _ = writeln!(
                out,
                ">{}{}</{}>",
                title.unwrap_or_default(),
                body.unwrap_or_default(),
                element(&item.shape)
            );
        }
    }
}

fn write_opacity(out: &mut String, attr: &str, color: &Rgba) {
    if color.a < 255 {
        let _ = write!(out, r#" {attr}="{}""#, coord(color.opacity()));
    }
}

fn element(shape: &Shape) -> &'static str {
    match shape {
        Shape::Rect { .. } => "rect",
        Shape::Line { .. } => "line",
        Shape::Text { .. } => "text",
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::AxisDomain => "domain",
        Role::Tick => "tick",
        Role::TickLabel => "tick-label",
        Role::Mark => "bar",
        Role::MarkLabel => "bar-label",
        Role::MeanLine => "mean-line",
        Role::MeanLabel => "mean-label",
        Role::Title => "title",
        Role::Caption => "caption",
        Role::LegendHeading => "legend-heading",
        Role::LegendSwatch => "legend-swatch",
        Role::LegendLabel => "legend-label",
    }
}

/// XML text/attribute escaping.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `annulus_demo`.

use std::fmt::Write as _;

use annulus_chart::{Mark, TextAnchor, TextBaseline, sort_for_paint};
use kurbo::Rect;
use peniko::Brush;

/// Renders marks into a standalone `<svg>` element covering `view`.
pub(crate) fn render_svg(view: Rect, marks: &[Mark]) -> String {
    let mut marks = marks.to_vec();
    sort_for_paint(&mut marks);

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    );
    out.push('\n');

    for mark in &marks {
        match mark {
            Mark::Path(p) => {
                let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
                let _ = write!(out, r#" fill="{}""#, paint(&p.fill));
                if let Some(stroke) = &p.stroke {
                    let _ = write!(
                        out,
                        r#" stroke="{}" stroke-width="{}""#,
                        paint(&stroke.brush),
                        stroke.width
                    );
                }
                out.push_str("/>\n");
            }
            Mark::Rect(r) => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                );
                if r.corner_radius > 0.0 {
                    let _ = write!(out, r#" rx="{}""#, r.corner_radius);
                }
                let _ = write!(out, r#" fill="{}""#, paint(&r.fill));
                out.push_str("/>\n");
            }
            Mark::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "central",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                let anchor = match t.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}" text-anchor="{}" fill="{}">"#,
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    baseline,
                    anchor,
                    paint(&t.fill)
                );
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn paint(brush: &Brush) -> String {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 255 {
                format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
            } else {
                format!(
                    "rgba({},{},{},{})",
                    rgba.r,
                    rgba.g,
                    rgba.b,
                    f64::from(rgba.a) / 255.0
                )
            }
        }
        _ => String::from("none"),
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

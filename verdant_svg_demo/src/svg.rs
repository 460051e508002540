// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for plant frames.

use peniko::color::Srgb;
use peniko::{Brush, Color, GradientKind, RadialGradientPosition};
use verdant_render::{Frame, Size};

/// Serializes a frame into a standalone SVG document.
///
/// The frame's circular clip becomes a `clipPath`; gradient fills become
/// `radialGradient` defs in user-space units, matching the display list's
/// absolute coordinates.
pub(crate) fn frame_to_svg(frame: &Frame, viewport: Size) -> String {
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_count = 0_usize;

    defs.push_str(&format!(
        r#"<clipPath id="stage"><circle cx="{}" cy="{}" r="{}"/></clipPath>"#,
        frame.clip.center.x, frame.clip.center.y, frame.clip.radius
    ));
    defs.push('\n');

    for op in &frame.ops {
        let d = op.path.to_svg();
        body.push_str(&format!(r#"<path d="{d}""#));
        match &op.fill {
            Some(brush) => write_paint_attr(&mut body, &mut defs, &mut gradient_count, "fill", brush),
            None => body.push_str(r#" fill="none""#),
        }
        if let Some((brush, width)) = &op.stroke {
            write_paint_attr(&mut body, &mut defs, &mut gradient_count, "stroke", brush);
            body.push_str(&format!(
                r#" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round""#
            ));
        }
        body.push_str("/>\n");
    }

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = viewport.width,
        h = viewport.height
    ));
    out.push('\n');
    out.push_str("<defs>\n");
    out.push_str(&defs);
    out.push_str("</defs>\n");
    out.push_str(r#"<g clip-path="url(#stage)">"#);
    out.push('\n');
    out.push_str(&body);
    out.push_str("</g>\n</svg>\n");
    out
}

fn hex_and_opacity(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (hex, opacity)
}

fn write_paint_attr(
    out: &mut String,
    defs: &mut String,
    gradient_count: &mut usize,
    name: &str,
    brush: &Brush,
) {
    match brush {
        Brush::Solid(color) => {
            let (value, opacity) = hex_and_opacity(*color);
            out.push_str(&format!(r#" {name}="{value}""#));
            if let Some(o) = opacity {
                out.push_str(&format!(r#" {name}-opacity="{o}""#));
            }
        }
        Brush::Gradient(gradient) => {
            let GradientKind::Radial(RadialGradientPosition {
                start_center,
                end_center,
                end_radius,
                ..
            }) = gradient.kind
            else {
                out.push_str(&format!(r#" {name}="none""#));
                return;
            };
            let id = format!("grad{}", *gradient_count);
            *gradient_count += 1;
            defs.push_str(&format!(
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}" fx="{}" fy="{}">"#,
                end_center.x, end_center.y, end_radius, start_center.x, start_center.y
            ));
            for stop in gradient.stops.iter() {
                let color = stop.color.to_alpha_color::<Srgb>();
                let (value, opacity) = hex_and_opacity(color);
                defs.push_str(&format!(
                    r#"<stop offset="{}" stop-color="{value}""#,
                    stop.offset
                ));
                if let Some(o) = opacity {
                    defs.push_str(&format!(r#" stop-opacity="{o}""#));
                }
                defs.push_str("/>");
            }
            defs.push_str("</radialGradient>\n");
            out.push_str(&format!(r#" {name}="url(#{id})""#));
        }
        _ => {
            out.push_str(&format!(r#" {name}="none""#));
        }
    }
}

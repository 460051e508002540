// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path construction for the pot and the plant's ornaments.
//!
//! Everything here is authored in a local coordinate frame (y-down, origin
//! at the attachment point) and baked into absolute coordinates through the
//! caller's transform, since the display list carries no transform state of
//! its own. Stroke widths and gradient geometry are scaled by the caller's
//! `length_scale` for the same reason.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, Shape, Vec2};
use peniko::color::palette::css;
use peniko::{Brush, Gradient};

use verdant_lsystem::jitter;

use crate::color::lerp_rgb;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::pipeline::{DrawOp, PlantPart};
use crate::style::PlantStyle;

/// Flattening tolerance for ellipse/circle paths.
const TOLERANCE: f64 = 0.1;

/// Emits the pot: rim, tapered body, and soil ellipse, centered on `anchor`.
pub(crate) fn pot(ops: &mut Vec<DrawOp>, style: &PlantStyle, anchor: Point, size: f64) {
    let at = Affine::translate(anchor.to_vec2());

    let rim = Rect::new(-size / 2.0 - 4.0, 0.0, size / 2.0 + 4.0, 12.0);
    ops.push(DrawOp::fill(
        PlantPart::Pot,
        at * rim.to_path(TOLERANCE),
        style.pot_rim,
    ));

    let mut body = BezPath::new();
    body.move_to((-size / 2.0, 12.0));
    body.line_to((size / 2.0, 12.0));
    body.line_to((size / 2.0 - 8.0, size * 0.8));
    body.line_to((-size / 2.0 + 8.0, size * 0.8));
    body.close_path();
    ops.push(DrawOp::fill(PlantPart::Pot, at * body, style.pot_body));

    let soil = Ellipse::new(Point::ORIGIN, Vec2::new(size / 2.0 - 2.0, 6.0), 0.0);
    ops.push(DrawOp::fill(
        PlantPart::Soil,
        (at * soil).to_path(TOLERANCE),
        style.soil,
    ));
}

/// Emits a detailed leaf: a veined stem, three shrinking leaflet pairs, and
/// a terminal blade, all hanging off the caller's transform.
pub(crate) fn leaf(
    ops: &mut Vec<DrawOp>,
    style: &PlantStyle,
    transform: Affine,
    size: f64,
    length_scale: f64,
) {
    let stem_len = size * 1.1;

    let mut stem = BezPath::new();
    stem.move_to((0.0, 0.0));
    stem.line_to((0.0, -stem_len));
    ops.push(DrawOp::stroke(
        PlantPart::Leaf,
        transform * stem,
        style.leaf_vein,
        (0.8_f64).max(size * 0.1) * length_scale,
    ));

    let steps = 3;
    for i in 0..steps {
        let t = (i + 1) as f64 / (steps + 1) as f64;
        let y = -stem_len * t;
        let w = size * (0.75 - 0.2 * t);
        let h = w * 0.7;
        leaflet(ops, style, transform, w, h, y, 1.0, length_scale);
        leaflet(ops, style, transform, w, h, y, -1.0, length_scale);
    }

    // Terminal blade at the stem tip.
    let tip = transform * Affine::translate((0.0, -stem_len));
    let tip_w = size * 0.8;
    let tip_h = size * 1.1;
    let blade = Ellipse::new(Point::ORIGIN, Vec2::new(tip_w, tip_h), 0.0);
    ops.push(DrawOp::fill(
        PlantPart::Leaf,
        (tip * blade).to_path(TOLERANCE),
        style.leaf,
    ));
    let sheen = Ellipse::new(
        Point::new(-tip_w * 0.25, -tip_h * 0.25),
        Vec2::new(tip_w * 0.5, tip_h * 0.5),
        0.0,
    );
    ops.push(DrawOp::fill(
        PlantPart::Leaf,
        (tip * sheen).to_path(TOLERANCE),
        style.leaf_highlight.with_alpha(0.5),
    ));
}

/// One leaflet of a pair: blade, highlight sheen, and a center vein.
fn leaflet(
    ops: &mut Vec<DrawOp>,
    style: &PlantStyle,
    parent: Affine,
    w: f64,
    h: f64,
    offset_y: f64,
    side: f64,
    length_scale: f64,
) {
    let local = parent
        * Affine::translate((side * w * 0.5, offset_y))
        * Affine::rotate(side * core::f64::consts::PI / 12.0);

    let blade = Ellipse::new(Point::ORIGIN, Vec2::new(w, h), 0.0);
    ops.push(DrawOp::fill(
        PlantPart::Leaf,
        (local * blade).to_path(TOLERANCE),
        style.leaf,
    ));

    let sheen = Ellipse::new(
        Point::new(-w * 0.2, -h * 0.15),
        Vec2::new(w * 0.55, h * 0.5),
        0.0,
    );
    ops.push(DrawOp::fill(
        PlantPart::Leaf,
        (local * sheen).to_path(TOLERANCE),
        style.leaf_highlight.with_alpha(0.45),
    ));

    let mut vein = BezPath::new();
    vein.move_to((-w * 0.1, -h * 0.5));
    vein.line_to((w * 0.15, h * 0.5));
    ops.push(DrawOp::stroke(
        PlantPart::Leaf,
        local * vein,
        style.leaf_vein,
        (0.5_f64).max(w * 0.08) * length_scale,
    ));
}

/// Emits a fruit cluster: a short stalk, the primary fruit, and sometimes a
/// smaller companion (decided by the jitter source, so it never flickers).
pub(crate) fn fruit_cluster(
    ops: &mut Vec<DrawOp>,
    style: &PlantStyle,
    transform: Affine,
    base_size: f64,
    ripeness: f64,
    index: usize,
    length_scale: f64,
) {
    let mut stalk = BezPath::new();
    stalk.move_to((0.0, 0.0));
    stalk.line_to((0.0, 12.0));
    ops.push(DrawOp::stroke(
        PlantPart::Fruit,
        transform * stalk,
        style.fruit_stalk,
        2.0 * length_scale,
    ));

    let hang = transform * Affine::translate((0.0, 12.0));
    fruit_body(ops, style, hang, base_size, ripeness, length_scale);

    if jitter(index + 101) > 0.65 {
        let companion = hang * Affine::translate((base_size * 0.95, base_size * 0.15));
        fruit_body(ops, style, companion, base_size * 0.85, ripeness, length_scale);
    }
}

/// One fruit: radial-gradient body, gloss highlight, and calyx.
fn fruit_body(
    ops: &mut Vec<DrawOp>,
    style: &PlantStyle,
    transform: Affine,
    size: f64,
    ripeness: f64,
    length_scale: f64,
) {
    // Two-stage ripeness ramp: green to orange, then orange to red.
    let base = if ripeness < 0.3 {
        lerp_rgb(style.fruit_unripe, style.fruit_turning, ripeness / 0.3)
    } else {
        lerp_rgb(style.fruit_turning, style.fruit_ripe, (ripeness - 0.3) / 0.7)
    };

    let light = lerp_rgb(base, css::WHITE, 0.25);
    let dark = lerp_rgb(base, style.fruit_shade, 0.35);
    let gradient = Gradient::new_two_point_radial(
        transform * Point::new(-size * 0.3, -size * 0.3),
        #[allow(
            clippy::cast_possible_truncation,
            reason = "gradient radii are f32 in peniko; precision loss is immaterial"
        )]
        {
            (size * 0.1 * length_scale) as f32
        },
        transform * Point::ORIGIN,
        #[allow(
            clippy::cast_possible_truncation,
            reason = "gradient radii are f32 in peniko; precision loss is immaterial"
        )]
        {
            (size * length_scale) as f32
        },
    )
    .with_stops([(0.0, light), (0.7, base), (1.0, dark)]);

    let body = Circle::new(Point::ORIGIN, size);
    ops.push(DrawOp {
        part: PlantPart::Fruit,
        path: (transform * body).to_path(TOLERANCE),
        fill: Some(Brush::Gradient(gradient)),
        stroke: None,
    });

    let gloss = Ellipse::new(
        Point::new(-size * 0.28, -size * 0.38),
        Vec2::new(size * 0.2, size * 0.12),
        core::f64::consts::PI / 5.0,
    );
    ops.push(DrawOp::fill(
        PlantPart::Fruit,
        (transform * gloss).to_path(TOLERANCE),
        css::WHITE.with_alpha(0.18),
    ));

    let outer_r = size * 0.55;
    let inner_r = size * 0.18;
    let mut calyx = BezPath::new();
    for i in 0..5 {
        let angle =
            core::f64::consts::TAU * i as f64 / 5.0 - core::f64::consts::FRAC_PI_2;
        let outer = Point::new(angle.cos() * outer_r, angle.sin() * outer_r);
        let inner = Point::new(
            (angle + 0.35).cos() * inner_r,
            (angle + 0.35).sin() * inner_r,
        );
        if i == 0 {
            calyx.move_to(outer);
        } else {
            calyx.line_to(outer);
        }
        calyx.line_to(inner);
    }
    calyx.close_path();
    ops.push(DrawOp::fill(
        PlantPart::Fruit,
        transform * calyx,
        style.fruit_calyx,
    ));
}

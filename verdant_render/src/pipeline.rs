// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame render pipeline.
//!
//! Re-walks the expanded symbol sequence with a draw visitor over the same
//! shared walker the geometry analyzer uses, so the two passes can never
//! disagree about branch structure. The output is a [`Frame`]: a circular
//! clip plus draw ops in paint order, with all geometry already in surface
//! coordinates.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Circle, Point};
use peniko::Brush;

use verdant_lsystem::{Grammar, PlantBounds, TurtleVisitor, WalkError, jitter, walk};

use crate::color::lerp_rgb;
use crate::engine::Size;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::growth::MIN_VISIBLE_SCALE;
use crate::ornaments;
use crate::style::PlantStyle;

/// Which part of the composition a draw op belongs to.
///
/// Ops are already emitted in paint order; the tag exists so backends can
/// treat parts differently (and so tests can count ornaments).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantPart {
    /// Pot rim and body.
    Pot,
    /// The soil ellipse inside the pot.
    Soil,
    /// A tapered stem segment.
    Stem,
    /// Leaf blades, sheens, and veins.
    Leaf,
    /// Fruit bodies, stalks, and calyxes.
    Fruit,
}

/// One filled and/or stroked path in surface coordinates.
///
/// Strokes should be painted with round caps and joins.
#[derive(Clone, Debug)]
pub struct DrawOp {
    /// Which part of the composition this op draws.
    pub part: PlantPart,
    /// Path geometry, already transformed into surface coordinates.
    pub path: BezPath,
    /// Fill paint, if the path is filled.
    pub fill: Option<Brush>,
    /// Stroke paint and width, if the path is stroked.
    pub stroke: Option<(Brush, f64)>,
}

impl DrawOp {
    pub(crate) fn fill(part: PlantPart, path: BezPath, brush: impl Into<Brush>) -> Self {
        Self {
            part,
            path,
            fill: Some(brush.into()),
            stroke: None,
        }
    }

    pub(crate) fn stroke(
        part: PlantPart,
        path: BezPath,
        brush: impl Into<Brush>,
        width: f64,
    ) -> Self {
        Self {
            part,
            path,
            fill: None,
            stroke: Some((brush.into(), width)),
        }
    }
}

/// One rendered frame: a clip region and draw ops in paint order.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Circular clip applied before any drawing, so the composition never
    /// overflows its container whatever the plant's aspect ratio.
    pub clip: Circle,
    /// Draw ops in paint order.
    pub ops: Vec<DrawOp>,
}

/// The uniform-equivalent length scale of an affine.
///
/// The source material strokes under a (non-uniform) canvas transform; the
/// display list stores absolute coordinates instead, so widths get scaled by
/// this factor explicitly.
fn length_scale(affine: Affine) -> f64 {
    affine.determinant().abs().sqrt()
}

/// The draw pass's turtle state: the accumulated transform, plus a scalar
/// heading used only to swing fruit clusters upright.
#[derive(Clone, Copy)]
struct DrawState {
    transform: Affine,
    heading: f64,
}

struct DrawVisitor<'a> {
    state: DrawState,
    ops: &'a mut Vec<DrawOp>,
    style: &'a PlantStyle,
    growth: f64,
    seq_len: usize,
    step: f64,
    angle_deg: f64,
}

impl DrawVisitor<'_> {
    fn rel_pos(&self, index: usize) -> f64 {
        index as f64 / self.seq_len as f64
    }
}

impl TurtleVisitor for DrawVisitor<'_> {
    type State = DrawState;

    fn snapshot(&self) -> DrawState {
        self.state
    }

    fn restore(&mut self, state: DrawState) {
        self.state = state;
    }

    fn forward(&mut self, index: usize) {
        let rel = self.rel_pos(index);
        let scale = length_scale(self.state.transform);

        // Thick at the base, tapering toward the tips, never hairline.
        let width = (1.2_f64).max(9.0 * (1.0 - rel).powf(0.8));
        let color = lerp_rgb(self.style.stem_young, self.style.stem_mature, rel);

        let mut segment = BezPath::new();
        segment.move_to((0.0, 0.0));
        segment.line_to((0.0, -self.step));
        self.ops.push(DrawOp::stroke(
            PlantPart::Stem,
            self.state.transform * segment,
            color,
            width * scale,
        ));
        self.state.transform *= Affine::translate((0.0, -self.step));

        if self.growth > 0.25 && rel > 0.2 && index % 5 == 0 {
            let side = if jitter(index) > 0.5 { 1.0 } else { -1.0 };
            let placement =
                self.state.transform * Affine::rotate(side * core::f64::consts::FRAC_PI_4);
            let size = self.step * (0.9 + 0.3 * (1.0 - rel)) * self.growth;
            ornaments::leaf(self.ops, self.style, placement, size, scale);
        }
    }

    fn turn(&mut self, index: usize, sign: f64) {
        let delta = sign * (self.angle_deg + jitter(index) * 5.0).to_radians();
        self.state.transform *= Affine::rotate(delta);
        self.state.heading += delta;
    }

    fn marker(&mut self, index: usize, symbol: char) {
        if symbol != 'X' {
            return;
        }
        let rel = self.rel_pos(index);
        if self.growth > 0.3 && rel > 0.25 && rel < 0.9 && index % 6 == 0 {
            let ripeness = ((self.growth - 0.3) / 0.7).min(1.0);
            // Swing the cluster upright so fruit hangs down regardless of
            // which way the branch points.
            let upright = self.state.transform
                * Affine::rotate(-self.state.heading + core::f64::consts::PI);
            ornaments::fruit_cluster(
                self.ops,
                self.style,
                upright,
                self.step * 1.6,
                ripeness,
                index,
                length_scale(upright),
            );
        }
    }
}

/// Renders one frame of the plant into a display list.
///
/// `growth` is the effective growth fraction from the controller; `bounds`
/// is the precomputed full-growth box. Fails only if the sequence's branch
/// symbols are unbalanced, which a validated engine rules out up front.
pub(crate) fn render(
    sequence: &str,
    grammar: &Grammar,
    bounds: &PlantBounds,
    style: &PlantStyle,
    growth: f64,
    viewport: Size,
) -> Result<Frame, WalkError> {
    let cx = viewport.width / 2.0;
    let cy = viewport.height / 2.0;
    let radius = viewport.width.min(viewport.height) / 2.0 - style.clip_margin;

    let mut ops = Vec::new();

    let pot_anchor = Point::new(cx, cy + radius * 0.6);
    let pot_size = radius * 0.5;
    ornaments::pot(&mut ops, style, pot_anchor, pot_size);

    // Fit the full-growth box into the clip circle, with headroom.
    let plant_w = if bounds.width > 0.0 { bounds.width } else { 1.0 };
    let plant_h = if bounds.height > 0.0 { bounds.height } else { 1.0 };
    let avail_w = radius * 1.4;
    let avail_h = radius * 1.5;
    let fit = (avail_h / plant_h).min(avail_w / plant_w) * style.headroom;

    let scale = fit * growth.max(MIN_VISIBLE_SCALE);
    let base = Affine::translate(pot_anchor.to_vec2())
        * Affine::scale_non_uniform(scale * style.width_stretch, scale * style.height_squash)
        * Affine::translate((-bounds.center_x, -bounds.max_y));

    let mut visitor = DrawVisitor {
        state: DrawState {
            transform: base,
            heading: -core::f64::consts::FRAC_PI_2,
        },
        ops: &mut ops,
        style,
        growth,
        seq_len: sequence.chars().count(),
        step: grammar.base_length(),
        angle_deg: grammar.angle_deg(),
    };
    walk(sequence, &mut visitor)?;

    Ok(Frame {
        clip: Circle::new(Point::new(cx, cy), radius),
        ops,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn frame_at(growth: f64) -> Frame {
        let grammar = Grammar::plant();
        let sequence = grammar.expand();
        let bounds = verdant_lsystem::measure(&sequence, &grammar).unwrap();
        let style = PlantStyle::default();
        let viewport = Size {
            width: 400.0,
            height: 400.0,
        };
        render(&sequence, &grammar, &bounds, &style, growth, viewport).unwrap()
    }

    fn count(frame: &Frame, part: PlantPart) -> usize {
        frame.ops.iter().filter(|op| op.part == part).count()
    }

    #[test]
    fn frame_always_contains_the_pot() {
        let f = frame_at(0.1);
        assert_eq!(count(&f, PlantPart::Pot), 2);
        assert_eq!(count(&f, PlantPart::Soil), 1);
    }

    #[test]
    fn stem_count_is_independent_of_growth() {
        let a = frame_at(0.1);
        let b = frame_at(1.0);
        assert_eq!(count(&a, PlantPart::Stem), count(&b, PlantPart::Stem));
        assert!(count(&a, PlantPart::Stem) > 100, "plant looks truncated");
    }

    #[test]
    fn ornaments_increase_monotonically_with_growth() {
        let quarter = frame_at(0.25);
        let mid = frame_at(0.6);
        let full = frame_at(1.0);

        let leaves = |f: &Frame| count(f, PlantPart::Leaf);
        let fruit = |f: &Frame| count(f, PlantPart::Fruit);

        // At 0.25 the leaf gate (growth > 0.25) is still closed.
        assert_eq!(leaves(&quarter), 0);
        assert_eq!(fruit(&quarter), 0);
        assert!(leaves(&mid) > 0);
        assert!(leaves(&full) >= leaves(&mid));
        assert!(fruit(&mid) > 0);
        assert!(fruit(&full) >= fruit(&mid));
    }

    #[test]
    fn clip_circle_is_inset_from_the_container() {
        let f = frame_at(1.0);
        assert_eq!(f.clip.center, Point::new(200.0, 200.0));
        assert_eq!(f.clip.radius, 180.0);
    }

    #[test]
    fn frames_are_deterministic() {
        let a = frame_at(0.6);
        let b = frame_at(0.6);
        assert_eq!(a.ops.len(), b.ops.len());
        for (x, y) in a.ops.iter().zip(b.ops.iter()) {
            assert_eq!(x.part, y.part);
            assert_eq!(x.path.elements(), y.path.elements());
        }
    }

    #[test]
    fn stems_taper_from_base_to_tip() {
        let f = frame_at(1.0);
        let widths: std::vec::Vec<f64> = f
            .ops
            .iter()
            .filter(|op| op.part == PlantPart::Stem)
            .filter_map(|op| op.stroke.as_ref().map(|&(_, w)| w))
            .collect();
        let first = widths.first().copied().unwrap();
        let last = widths.last().copied().unwrap();
        assert!(
            first > last,
            "expected taper, got base {first} vs tip {last}"
        );
    }
}

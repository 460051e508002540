// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry analysis: the measure pass over a symbol sequence.
//!
//! This runs once, after expansion, on the *fully grown* plant with the
//! *unjittered* turn angle, so the resulting box is stable across frames and
//! independent of growth fraction and draw-time noise. The render pipeline
//! derives its fit scale from it every frame without re-measuring.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::grammar::Grammar;
use crate::turtle::{TurtleVisitor, WalkError, walk};

/// The tight bounding box and horizontal center of a fully-grown plant.
///
/// Coordinates follow the turtle's y-down convention: the plant grows toward
/// negative y, so `max_y` is the root end (the pot anchor).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlantBounds {
    /// Leftmost extent.
    pub min_x: f64,
    /// Rightmost extent.
    pub max_x: f64,
    /// Topmost extent (most negative y).
    pub min_y: f64,
    /// Bottommost extent.
    pub max_y: f64,
    /// `max_x - min_x`.
    pub width: f64,
    /// `max_y - min_y`.
    pub height: f64,
    /// Horizontal midpoint, used to center the plant over the pot.
    pub center_x: f64,
}

/// Position and heading; the measure pass's entire turtle state.
#[derive(Clone, Copy)]
struct MeasureState {
    x: f64,
    y: f64,
    heading: f64,
}

struct MeasureVisitor {
    state: MeasureState,
    step: f64,
    turn_rad: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl MeasureVisitor {
    fn new(step: f64, angle_deg: f64) -> Self {
        Self {
            // Heading straight up in y-down coordinates.
            state: MeasureState {
                x: 0.0,
                y: 0.0,
                heading: -core::f64::consts::FRAC_PI_2,
            },
            step,
            turn_rad: angle_deg.to_radians(),
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }

    fn into_bounds(self) -> PlantBounds {
        PlantBounds {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            width: self.max_x - self.min_x,
            height: self.max_y - self.min_y,
            center_x: (self.min_x + self.max_x) / 2.0,
        }
    }
}

impl TurtleVisitor for MeasureVisitor {
    type State = MeasureState;

    fn snapshot(&self) -> MeasureState {
        self.state
    }

    fn restore(&mut self, state: MeasureState) {
        self.state = state;
    }

    fn forward(&mut self, _index: usize) {
        self.state.x += self.state.heading.cos() * self.step;
        self.state.y += self.state.heading.sin() * self.step;
        self.min_x = self.min_x.min(self.state.x);
        self.max_x = self.max_x.max(self.state.x);
        self.min_y = self.min_y.min(self.state.y);
        self.max_y = self.max_y.max(self.state.y);
    }

    fn turn(&mut self, _index: usize, sign: f64) {
        self.state.heading += sign * self.turn_rad;
    }

    fn marker(&mut self, _index: usize, _symbol: char) {}
}

/// Measures the tight bounding box of the fully-grown plant.
///
/// A single linear pass with no drawing side effects. Fails only if the
/// sequence's branch symbols are unbalanced, which makes the grammar a fatal
/// configuration error.
pub fn measure(sequence: &str, grammar: &Grammar) -> Result<PlantBounds, WalkError> {
    let mut visitor = MeasureVisitor::new(grammar.base_length(), grammar.angle_deg());
    walk(sequence, &mut visitor)?;
    Ok(visitor.into_bounds())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn straight_stem_measures_its_length() {
        let g = Grammar::new("FFF").with_base_length(10.0);
        let b = measure("FFF", &g).unwrap();
        assert!((b.height - 30.0).abs() < 1e-9);
        assert!((b.width - 0.0).abs() < 1e-9);
        assert!((b.min_y + 30.0).abs() < 1e-9, "plant should grow upward");
        assert!((b.max_y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn branches_restore_position_exactly() {
        // The bracketed excursion must not move the main stem's endpoint:
        // with it removed the box only loses the branch's own extent.
        let g = Grammar::new("").with_base_length(5.0).with_angle(90.0);
        let with_branch = measure("F[+F]F", &g).unwrap();
        let without = measure("FF", &g).unwrap();
        assert!((with_branch.height - without.height).abs() < 1e-9);
        assert!(with_branch.width > without.width);
    }

    #[test]
    fn measure_is_deterministic() {
        let g = Grammar::plant();
        let s = g.expand();
        assert_eq!(measure(&s, &g).unwrap(), measure(&s, &g).unwrap());
    }

    #[test]
    fn plant_grammar_is_not_degenerate() {
        let g = Grammar::plant();
        let b = measure(&g.expand(), &g).unwrap();
        assert!(b.width > 0.0, "expected horizontal spread, got {b:?}");
        assert!(b.height > 0.0, "expected vertical growth, got {b:?}");
    }

    #[test]
    fn unbalanced_sequences_are_rejected() {
        let g = Grammar::new("");
        assert_eq!(
            measure("F]F", &g),
            Err(WalkError::UnmatchedClose { index: 1 })
        );
        assert_eq!(
            measure("F[F", &g),
            Err(WalkError::UnclosedBranch { depth: 1 })
        );
    }

    #[test]
    fn center_x_is_the_horizontal_midpoint() {
        let g = Grammar::new("").with_base_length(4.0).with_angle(90.0);
        // Turn away from vertical so the box gains horizontal extent.
        let b = measure("-F", &g).unwrap();
        assert!((b.center_x - b.min_x - b.width / 2.0).abs() < 1e-9);
    }
}

// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine instance.
//!
//! All previously-ambient state (sequence, bounds, growth) lives in one
//! owned value, so multiple plants can coexist and tests can drive frames
//! deterministically.

extern crate alloc;

use alloc::string::String;

use verdant_lsystem::{Grammar, PlantBounds, WalkError, measure};

use crate::growth::GrowthProgress;
use crate::pipeline::{self, Frame};
use crate::style::PlantStyle;

/// Drawing-surface dimensions in logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

/// Errors from building a [`PlantEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The grammar expands to a sequence with unbalanced branch symbols.
    MalformedGrammar(WalkError),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedGrammar(err) => write!(f, "malformed grammar: {err}"),
        }
    }
}

impl core::error::Error for EngineError {}

impl From<WalkError> for EngineError {
    fn from(err: WalkError) -> Self {
        Self::MalformedGrammar(err)
    }
}

/// A plant: expanded once, measured once, rendered every frame.
///
/// Construction is the `initialize()` lifecycle point: grammar expansion and
/// geometry analysis happen here exactly once, and a malformed grammar is
/// refused outright so nothing partial ever reaches the screen. After that
/// the engine is driven by three inputs: growth progress from the external
/// timer, resize notifications from the host container, and a frame request
/// per display refresh.
#[derive(Debug)]
pub struct PlantEngine {
    grammar: Grammar,
    style: PlantStyle,
    sequence: String,
    bounds: PlantBounds,
    growth: GrowthProgress,
    viewport: Size,
}

impl PlantEngine {
    /// Expands and measures `grammar`, validating its branch structure.
    pub fn new(grammar: Grammar, style: PlantStyle) -> Result<Self, EngineError> {
        let sequence = grammar.expand();
        // Also validates: an unbalanced sequence fails the walk.
        let bounds = measure(&sequence, &grammar)?;
        Ok(Self {
            grammar,
            style,
            sequence,
            bounds,
            growth: GrowthProgress::default(),
            viewport: Size::default(),
        })
    }

    /// Applies a progress value from the external timer (the single input
    /// crossing the boundary). See [`GrowthProgress::set`] for the clamp and
    /// reset-sentinel policy.
    pub fn set_growth_progress(&mut self, progress: f64) {
        self.growth.set(progress);
    }

    /// The effective growth fraction the next frame will use.
    pub fn growth(&self) -> f64 {
        self.growth.get()
    }

    /// Stores new surface dimensions.
    ///
    /// Only the derived fit scale of subsequent frames changes; the sequence
    /// and bounds are never recomputed here.
    pub fn handle_resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The expanded symbol sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The precomputed full-growth bounding box.
    pub fn bounds(&self) -> PlantBounds {
        self.bounds
    }

    /// Renders a frame at the current growth and viewport.
    ///
    /// Returns `None` when there is nothing sensible to draw (missing or
    /// degenerate surface); the animation driver just retries on the next
    /// tick or resize, per the never-throw-out-of-the-loop rule.
    pub fn render_frame(&self) -> Option<Frame> {
        let Size { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite()) {
            return None;
        }
        let radius = width.min(height) / 2.0 - self.style.clip_margin;
        if radius <= 0.0 {
            return None;
        }
        pipeline::render(
            &self.sequence,
            &self.grammar,
            &self.bounds,
            &self.style,
            self.growth.get(),
            self.viewport,
        )
        // The sequence was validated at construction; a walk fault here is
        // a skipped frame, not a crash.
        .ok()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::pipeline::PlantPart;

    fn sized_engine() -> PlantEngine {
        let mut engine = PlantEngine::new(Grammar::plant(), PlantStyle::default()).unwrap();
        engine.handle_resize(Size {
            width: 300.0,
            height: 300.0,
        });
        engine
    }

    #[test]
    fn malformed_grammars_are_refused_at_construction() {
        let unclosed = Grammar::new("F[F").with_iterations(0);
        assert_eq!(
            PlantEngine::new(unclosed, PlantStyle::default()).err(),
            Some(EngineError::MalformedGrammar(WalkError::UnclosedBranch {
                depth: 1
            }))
        );

        // A rule can introduce the imbalance even when the axiom is fine.
        let bad_rule = Grammar::new("X").with_rule('X', "F]").with_iterations(1);
        assert!(PlantEngine::new(bad_rule, PlantStyle::default()).is_err());
    }

    #[test]
    fn zero_sized_viewport_skips_the_frame() {
        let mut engine = PlantEngine::new(Grammar::plant(), PlantStyle::default()).unwrap();
        assert!(engine.render_frame().is_none());
        engine.handle_resize(Size {
            width: 30.0,
            height: 30.0,
        });
        // Smaller than the clip margin: still nothing to draw.
        assert!(engine.render_frame().is_none());
        engine.handle_resize(Size {
            width: 300.0,
            height: 200.0,
        });
        assert!(engine.render_frame().is_some());
    }

    #[test]
    fn resize_never_touches_sequence_or_bounds() {
        let mut engine = sized_engine();
        let sequence = std::string::String::from(engine.sequence());
        let bounds = engine.bounds();
        engine.handle_resize(Size {
            width: 1024.0,
            height: 640.0,
        });
        let _ = engine.render_frame();
        assert_eq!(engine.sequence(), sequence);
        assert_eq!(engine.bounds(), bounds);
    }

    #[test]
    fn growth_input_follows_the_documented_policy() {
        let mut engine = sized_engine();
        engine.set_growth_progress(0.5);
        assert_eq!(engine.growth(), 0.5);
        engine.set_growth_progress(0.0);
        assert_eq!(engine.growth(), 1.0);
    }

    #[test]
    fn reset_sentinel_renders_as_fully_grown() {
        let mut engine = sized_engine();
        engine.set_growth_progress(1.0);
        let full = engine.render_frame().unwrap();
        engine.set_growth_progress(0.0);
        let reset = engine.render_frame().unwrap();
        assert_eq!(full.ops.len(), reset.ops.len());
    }

    #[test]
    fn growth_sweep_grows_the_ornament_set() {
        let mut engine = sized_engine();
        let mut counts = std::vec::Vec::new();
        for progress in [0.25, 0.6, 1.0] {
            engine.set_growth_progress(progress);
            let frame = engine.render_frame().unwrap();
            let ornaments = frame
                .ops
                .iter()
                .filter(|op| matches!(op.part, PlantPart::Leaf | PlantPart::Fruit))
                .count();
            counts.push(ornaments);
        }
        assert!(counts[0] < counts[1], "ornaments did not appear: {counts:?}");
        assert!(counts[1] <= counts[2], "ornaments regressed: {counts:?}");
    }
}

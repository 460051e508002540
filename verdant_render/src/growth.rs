// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The growth progress controller.
//!
//! The surrounding application owns a focus timer; this cell owns the single
//! scalar that crosses the boundary. Input is clamped to `[0, 1]` first, and
//! then an input of exactly 0 is stored as 1.0: the timer sends 0 on reset,
//! and reset means "show the finished plant", not "show nothing". That
//! sentinel is a documented contract inherited from the source behavior and
//! is deliberately not "fixed" here.

/// The render scale never drops below this fraction of the fit scale, so
/// the plant stays at least minimally visible at any progress value.
pub const MIN_VISIBLE_SCALE: f64 = 0.05;

/// Single-writer growth fraction cell; effective values lie in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthProgress(f64);

impl Default for GrowthProgress {
    /// A fresh cell reads as fully grown, matching the reset state.
    fn default() -> Self {
        Self(1.0)
    }
}

impl GrowthProgress {
    /// Applies a progress value from the external timer.
    ///
    /// Clamp happens before the sentinel check, so out-of-range negatives
    /// also land on "fully grown". Non-finite input is treated as a reset.
    pub fn set(&mut self, progress: f64) {
        let progress = if progress.is_finite() { progress } else { 0.0 };
        let clamped = progress.clamp(0.0, 1.0);
        self.0 = if clamped == 0.0 { 1.0 } else { clamped };
    }

    /// Returns the last-applied effective value.
    pub fn get(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn zero_is_the_fully_grown_sentinel() {
        let mut g = GrowthProgress::default();
        g.set(0.4);
        g.set(0.0);
        assert_eq!(g.get(), 1.0);
    }

    #[test]
    fn in_range_values_pass_through_exactly() {
        let mut g = GrowthProgress::default();
        g.set(0.5);
        assert_eq!(g.get(), 0.5);
        g.set(1.0);
        assert_eq!(g.get(), 1.0);
        g.set(0.061);
        assert_eq!(g.get(), 0.061);
    }

    #[test]
    fn clamping_happens_before_the_sentinel_check() {
        let mut g = GrowthProgress::default();
        // Below-range input clamps to 0, which then means "fully grown".
        g.set(-0.2);
        assert_eq!(g.get(), 1.0);
        g.set(3.5);
        assert_eq!(g.get(), 1.0);
    }

    #[test]
    fn non_finite_input_resets() {
        let mut g = GrowthProgress::default();
        g.set(0.3);
        g.set(f64::NAN);
        assert_eq!(g.get(), 1.0);
    }

    #[test]
    fn default_floor_sits_below_sensible_progress_values() {
        assert!(MIN_VISIBLE_SCALE < 0.5);
    }
}

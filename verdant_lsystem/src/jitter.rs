// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deterministic jitter source.
//!
//! Rendering needs per-symbol "randomness" (angle wobble, which side a leaf
//! sprouts on, whether a second fruit appears) that is bit-identical across
//! frames, processes, and runs. A stateful RNG would need seeding and would
//! desynchronize the measure and draw passes, so we use a pure sine hash of
//! the symbol index instead.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps a symbol index to a reproducible pseudo-random value in `[0, 1)`.
///
/// Same index, same value — always. The constants are the classic shader
/// one-liner (`fract(sin(i * 12.9898 + 78.233) * 43758.5453)`).
pub fn jitter(index: usize) -> f64 {
    let x = (index as f64 * 12.9898 + 78.233).sin() * 43758.5453;
    x - x.floor()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn jitter_is_pure() {
        for i in [0_usize, 1, 17, 999, 123_456] {
            assert_eq!(jitter(i).to_bits(), jitter(i).to_bits());
        }
    }

    #[test]
    fn jitter_stays_in_unit_interval() {
        for i in 0..100_000_usize {
            let v = jitter(i);
            assert!((0.0..1.0).contains(&v), "jitter({i}) = {v} out of range");
        }
    }

    #[test]
    fn jitter_is_not_constant() {
        let a = jitter(0);
        assert!((0..100).any(|i| jitter(i) != a), "jitter looks degenerate");
    }
}

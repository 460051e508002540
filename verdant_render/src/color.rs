// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small color helpers used by the pipeline and ornaments.

use peniko::Color;

/// Linearly interpolates two colors per RGB channel.
///
/// `t` is clamped to `[0, 1]`; alpha comes from `a`. This is plain
/// component-space interpolation (the stem/fruit ramps are authored for it),
/// not a perceptual blend.
pub(crate) fn lerp_rgb(a: Color, b: Color, t: f64) -> Color {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "color components are f32; the precision loss is immaterial"
    )]
    let t = t.clamp(0.0, 1.0) as f32;
    let [r1, g1, b1, a1] = a.components;
    let [r2, g2, b2, _] = b.components;
    Color::new([
        r1 + (r2 - r1) * t,
        g1 + (g2 - g1) * t,
        b1 + (b2 - b1) * t,
        a1,
    ])
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        let a = Color::from_rgb8(0x00, 0x00, 0x00);
        let b = Color::from_rgb8(0xFF, 0xFF, 0xFF);
        assert_eq!(lerp_rgb(a, b, 0.0).components, a.components);
        assert_eq!(lerp_rgb(a, b, 1.0).components, b.components);
        let mid = lerp_rgb(a, b, 0.5);
        assert!((mid.components[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn t_is_clamped() {
        let a = Color::from_rgb8(10, 20, 30);
        let b = Color::from_rgb8(200, 100, 50);
        assert_eq!(lerp_rgb(a, b, -3.0).components, a.components);
        assert_eq!(lerp_rgb(a, b, 7.0).components, b.components);
    }
}

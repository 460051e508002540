// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual styling for the rendered plant.

use peniko::Color;

/// Palette and stylization knobs for the plant, pot, and ornaments.
///
/// The defaults are the engine's house style: a terracotta pot, a stem ramp
/// that lightens toward the tips, and tomato-like fruit. All fields can be
/// overridden with the `with_*` setters before the engine is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantStyle {
    /// Stem color at the base of the plant.
    pub stem_young: Color,
    /// Stem color toward the tips.
    pub stem_mature: Color,
    /// Leaf blade fill.
    pub leaf: Color,
    /// Lighter sheen layered over leaf blades.
    pub leaf_highlight: Color,
    /// Leaf stem and vein strokes.
    pub leaf_vein: Color,
    /// The short stalk a fruit cluster hangs from.
    pub fruit_stalk: Color,
    /// Fruit body color before it starts turning.
    pub fruit_unripe: Color,
    /// Fruit body color mid-ripening.
    pub fruit_turning: Color,
    /// Fruit body color when fully ripe.
    pub fruit_ripe: Color,
    /// Dark tone mixed into the fruit gradient's rim.
    pub fruit_shade: Color,
    /// The five-pointed calyx on top of each fruit.
    pub fruit_calyx: Color,
    /// Pot rim fill.
    pub pot_rim: Color,
    /// Pot body fill.
    pub pot_body: Color,
    /// Soil ellipse fill.
    pub soil: Color,
    /// Fraction of the fitted size actually used, leaving a margin.
    pub headroom: f64,
    /// Horizontal stylization multiplier (slightly wider than exact fit).
    pub width_stretch: f64,
    /// Vertical stylization multiplier (slightly shorter than exact fit).
    pub height_squash: f64,
    /// Inset from the container edge to the circular clip, in surface units.
    pub clip_margin: f64,
}

impl Default for PlantStyle {
    fn default() -> Self {
        Self {
            stem_young: Color::from_rgb8(0x47, 0x62, 0x43),
            stem_mature: Color::from_rgb8(0x76, 0x99, 0x6A),
            leaf: Color::from_rgb8(0x4E, 0x7B, 0x43),
            leaf_highlight: Color::from_rgb8(0x83, 0xA9, 0x6A),
            leaf_vein: Color::from_rgb8(0x3D, 0x5F, 0x36),
            fruit_stalk: Color::from_rgb8(0x43, 0xA0, 0x47),
            fruit_unripe: Color::from_rgb8(0x6E, 0x8C, 0x3A),
            fruit_turning: Color::from_rgb8(0xD0, 0x8C, 0x3A),
            fruit_ripe: Color::from_rgb8(0xC5, 0x3A, 0x34),
            fruit_shade: Color::from_rgb8(0x5A, 0x16, 0x12),
            fruit_calyx: Color::from_rgb8(0x3C, 0x6A, 0x2A),
            pot_rim: Color::from_rgb8(0xC0, 0x6B, 0x3E),
            pot_body: Color::from_rgb8(0xD3, 0x7B, 0x4A),
            soil: Color::from_rgb8(0x3E, 0x27, 0x23),
            headroom: 0.9,
            width_stretch: 1.25,
            height_squash: 0.9,
            clip_margin: 20.0,
        }
    }
}

impl PlantStyle {
    /// Sets the young-to-mature stem color ramp.
    pub fn with_stem_ramp(mut self, young: Color, mature: Color) -> Self {
        self.stem_young = young;
        self.stem_mature = mature;
        self
    }

    /// Sets the fitted-size headroom factor (must stay below 1 to keep a
    /// margin inside the clip).
    pub fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    /// Sets the horizontal/vertical stylization multipliers.
    pub fn with_stylization(mut self, width_stretch: f64, height_squash: f64) -> Self {
        self.width_stretch = width_stretch;
        self.height_squash = height_squash;
        self
    }

    /// Sets the clip inset from the container edge.
    pub fn with_clip_margin(mut self, clip_margin: f64) -> Self {
        self.clip_margin = clip_margin;
        self
    }
}

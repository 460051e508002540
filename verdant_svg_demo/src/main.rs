// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the default plant at a few growth stages and writes each frame
//! out as a standalone SVG file.

mod svg;

use verdant_lsystem::Grammar;
use verdant_render::{PlantEngine, PlantStyle, Size};

const STAGES: [(&str, f64); 4] = [
    ("seedling", 0.25),
    ("juvenile", 0.6),
    ("mature", 1.0),
    // Progress 0 is the reset sentinel and draws the fully grown plant.
    ("reset", 0.0),
];

fn main() {
    let mut engine =
        PlantEngine::new(Grammar::plant(), PlantStyle::default()).expect("default plant grammar");
    let viewport = Size {
        width: 480.0,
        height: 480.0,
    };
    engine.handle_resize(viewport);

    for (label, progress) in STAGES {
        engine.set_growth_progress(progress);
        let frame = engine
            .render_frame()
            .expect("viewport is valid, so a frame must render");
        let name = format!("verdant_{label}.svg");
        std::fs::write(&name, svg::frame_to_svg(&frame, viewport))
            .expect("write SVG file");
        println!(
            "wrote {name} ({} ops at growth {})",
            frame.ops.len(),
            engine.growth()
        );
    }
}

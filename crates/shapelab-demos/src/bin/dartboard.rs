//! Twenty-sector dartboard.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::process::ExitCode;

use shapelab_demos::geometry::{dartboard_quad, disc};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

const SECTORS: u32 = 20;

const BLACK: Color = Color::rgb(0.08, 0.08, 0.08);
const CREAM: Color = Color::rgb(0.93, 0.88, 0.75);
const RED: Color = Color::rgb(0.80, 0.12, 0.12);
const GREEN: Color = Color::rgb(0.10, 0.55, 0.25);

/// (inner, outer, scoring band)
const RINGS: [(f32, f32, bool); 4] = [
    (0.10, 0.55, false), // inner single
    (0.55, 0.61, true),  // treble
    (0.61, 0.88, false), // outer single
    (0.88, 0.94, true),  // double
];

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let center = Vec2::zero();
    let sweep = TAU / SECTORS as f32;

    let mut layers = Vec::with_capacity((SECTORS as usize) * RINGS.len() + 2);
    for k in 0..SECTORS {
        let start = FRAC_PI_2 - sweep / 2.0 + k as f32 * sweep;
        let even = k % 2 == 0;
        for (inner, outer, scoring) in RINGS {
            let color = match (scoring, even) {
                (false, true) => BLACK,
                (false, false) => CREAM,
                (true, true) => RED,
                (true, false) => GREEN,
            };
            layers.push(Layer::new(
                shaders::flat(),
                dartboard_quad(center, inner, outer, start, sweep),
                Topology::TriangleFan,
                color,
            ));
        }
    }

    layers.push(Layer::new(shaders::flat(), disc(center, 0.10, 60), Topology::TriangleFan, GREEN));
    layers.push(Layer::new(shaders::flat(), disc(center, 0.04, 40), Topology::TriangleFan, RED));

    let config = DemoConfig::new("Dartboard").with_clear(Color::rgb(0.12, 0.12, 0.14));
    harness::run(config, layers)
}

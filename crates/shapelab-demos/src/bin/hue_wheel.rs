//! Twelve hue sectors around a dark hub.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::process::ExitCode;

use shapelab_demos::geometry::{dartboard_quad, disc, hue_color};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

const SECTORS: u32 = 12;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let center = Vec2::zero();
    let sweep = TAU / SECTORS as f32;

    // Red at the top, hues advancing counter-clockwise.
    let mut layers: Vec<Layer> = (0..SECTORS)
        .map(|k| {
            let start = FRAC_PI_2 - sweep / 2.0 + k as f32 * sweep;
            Layer::new(
                shaders::flat(),
                dartboard_quad(center, 0.35, 0.9, start, sweep),
                Topology::TriangleFan,
                hue_color(k as f32 / SECTORS as f32),
            )
        })
        .collect();

    layers.push(Layer::new(
        shaders::flat(),
        disc(center, 0.3, 120),
        Topology::TriangleFan,
        Color::rgb(0.15, 0.15, 0.17),
    ));

    harness::run(DemoConfig::new("Hue Wheel"), layers)
}

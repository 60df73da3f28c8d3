//! Alternating ring sectors around a half-disc.

use std::process::ExitCode;

use shapelab_demos::geometry::{inner_circle, ring_segment};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let center = Vec2::zero();
    let layers = vec![
        Layer::new(
            shaders::flat(),
            ring_segment(center, 0.55, 0.85, 600),
            Topology::TriangleStrip,
            Color::rgb(0.10, 0.55, 0.55),
        ),
        Layer::new(
            shaders::flat(),
            inner_circle(center, 0.45, 200),
            Topology::TriangleFan,
            Color::rgb(0.95, 0.55, 0.15),
        ),
    ];

    harness::run(DemoConfig::new("Rings"), layers)
}

//! Blue ring outline beside a dark blue bar.

use std::process::ExitCode;

use shapelab_demos::geometry::{bar, circle_ring};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::new("Color Wheel Shader");
    let layers = vec![
        Layer::new(
            shaders::flat(),
            circle_ring(Vec2::new(0.3, 0.0), 0.5),
            Topology::TriangleStrip,
            Color::rgb(0.165, 0.576, 0.820),
        ),
        Layer::new(
            shaders::flat(),
            bar(Vec2::new(-0.5, 0.0), 0.8, 0.2),
            Topology::TriangleFan,
            Color::rgb(0.192, 0.192, 0.514),
        ),
    ];

    harness::run(config, layers)
}

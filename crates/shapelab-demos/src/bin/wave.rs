//! Full-window quad shaded by a time-animated ripple.

use std::process::ExitCode;

use shapelab_demos::geometry::bar;
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let layers = vec![Layer::new(
        shaders::wave(),
        bar(Vec2::zero(), 2.0, 2.0),
        Topology::TriangleFan,
        Color::rgb(0.2, 0.6, 1.0),
    )];

    let config = DemoConfig::new("Wave").with_clear(Color::BLACK);
    harness::run(config, layers)
}

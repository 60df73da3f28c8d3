//! Hexagon with a crossing bar, its outline, and one program that fails to
//! compile and draws black.

use std::process::ExitCode;

use shapelab_demos::geometry::{bar, hexagon, hexagon_composite};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let center = Vec2::new(0.0, 0.05);
    let layers = vec![
        Layer::new(
            shaders::flat(),
            hexagon_composite(center, 0.6, 0.2, 1.5),
            Topology::Triangles,
            Color::rgb(0.25, 0.45, 0.85),
        ),
        Layer::new(
            shaders::flat(),
            hexagon(center, 0.7),
            Topology::LineLoop,
            Color::rgb(0.10, 0.15, 0.30),
        ),
        // Logged as a compile error; the bar renders with the fallback.
        Layer::new(
            shaders::broken(),
            bar(Vec2::new(0.0, -0.88), 0.08, 1.2),
            Topology::TriangleFan,
            Color::rgb(0.9, 0.1, 0.1),
        ),
    ];

    harness::run(DemoConfig::new("Hexagon"), layers)
}

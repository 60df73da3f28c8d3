//! Eight-petal flower with a round center.

use std::f32::consts::FRAC_PI_2;
use std::process::ExitCode;

use shapelab_demos::geometry::{disc, flower};
use shapelab_demos::harness::{self, DemoConfig, Layer};
use shapelab_demos::shaders;
use shapelab_engine::coords::Vec2;
use shapelab_engine::logging::{init_logging, LoggingConfig};
use shapelab_engine::paint::Color;
use shapelab_engine::render::Topology;

const PETALS: u32 = 8;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let center = Vec2::zero();
    let petal_colors = [Color::rgb(0.91, 0.36, 0.55), Color::rgb(0.98, 0.62, 0.73)];

    let mut layers: Vec<Layer> = flower(center, 0.25, 0.85, PETALS, FRAC_PI_2)
        .into_iter()
        .enumerate()
        .map(|(k, petal)| {
            Layer::new(
                shaders::flat(),
                petal,
                Topology::TriangleFan,
                petal_colors[k % petal_colors.len()],
            )
        })
        .collect();

    layers.push(Layer::new(
        shaders::flat(),
        disc(center, 0.2, 90),
        Topology::TriangleFan,
        Color::rgb(0.98, 0.80, 0.20),
    ));

    let config = DemoConfig::new("Flower").with_clear(Color::rgb(0.93, 0.96, 0.90));
    harness::run(config, layers)
}

//! Shared demo harness.
//!
//! A demo is a window configuration plus an ordered list of layers. The
//! harness compiles each distinct program once, uploads every layer when
//! the GPU is ready, draws them in order each frame and exits on Escape.

use std::process::ExitCode;

use winit::dpi::PhysicalSize;

use shapelab_engine::core::{App, AppControl, FrameCtx};
use shapelab_engine::device::{Gpu, GpuInit};
use shapelab_engine::input::Key;
use shapelab_engine::paint::Color;
use shapelab_engine::render::{ShapeRenderer, Topology};
use shapelab_engine::shader::{compile_program, ProgramSource, ShaderProgram};
use shapelab_engine::window::{Runtime, RuntimeConfig};

/// Window parameters for one demo. Fixed for the life of the program.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
    pub clear: Color,
}

impl DemoConfig {
    /// 600 x 600 window cleared to white.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: PhysicalSize::new(600, 600),
            clear: Color::WHITE,
        }
    }

    pub fn with_clear(mut self, clear: Color) -> Self {
        self.clear = clear;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = PhysicalSize::new(width, height);
        self
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.size,
            resizable: true,
        }
    }
}

/// One drawable: a program, its geometry, how to assemble it, and the
/// uniform color.
#[derive(Debug, Clone)]
pub struct Layer {
    pub program: ProgramSource,
    pub geometry: Vec<f32>,
    pub topology: Topology,
    pub color: Color,
}

impl Layer {
    pub fn new(program: ProgramSource, geometry: Vec<f32>, topology: Topology, color: Color) -> Self {
        Self {
            program,
            geometry,
            topology,
            color,
        }
    }
}

/// `App` implementation shared by every demo binary.
pub struct ShapeDemo {
    config: DemoConfig,
    /// Drained into GPU buffers by `on_gpu_ready`.
    layers: Vec<Layer>,
    programs: Vec<(ProgramSource, ShaderProgram)>,
    renderer: Option<ShapeRenderer>,
}

impl ShapeDemo {
    pub fn new(config: DemoConfig, layers: Vec<Layer>) -> Self {
        Self {
            config,
            layers,
            programs: Vec::new(),
            renderer: None,
        }
    }

    /// Opens the window and runs until it closes.
    pub fn run(self) -> anyhow::Result<()> {
        let config = self.config.runtime_config();
        // Demo colors are display values; skip the linear-to-sRGB encode.
        let gpu_init = GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        };
        Runtime::run(config, gpu_init, self)
    }

    /// Compiles `source` unless an identical program already exists.
    fn program_index(&mut self, device: &wgpu::Device, source: &ProgramSource) -> usize {
        if let Some(i) = self.programs.iter().position(|(s, _)| s == source) {
            return i;
        }
        let program = compile_program(device, source);
        self.programs.push((source.clone(), program));
        self.programs.len() - 1
    }
}

impl App for ShapeDemo {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) {
        let device = gpu.device();
        let mut renderer = ShapeRenderer::new(device, gpu.surface_format());

        for layer in std::mem::take(&mut self.layers) {
            let index = self.program_index(device, &layer.program);
            let (_, program) = &self.programs[index];
            renderer.register(device, program, &layer.geometry, layer.topology, layer.color);
        }

        log::info!(
            "{}: {} layers, {} programs, {} pipelines",
            self.config.title,
            renderer.len(),
            self.programs.len(),
            renderer.pipeline_count()
        );
        self.renderer = Some(renderer);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            log::info!("escape pressed");
            return AppControl::Exit;
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(self.config.clear, |rctx, rpass| {
            renderer.prepare(rctx);
            renderer.draw(rpass);
        })
    }

    fn on_exit(&mut self) {
        self.renderer = None;
        self.programs.clear();
        log::debug!("{}: GPU objects released", self.config.title);
    }
}

/// Runs one demo and maps the outcome to a process exit code.
///
/// Initialization failures are logged; shader problems never reach here.
pub fn run(config: DemoConfig, layers: Vec<Layer>) -> ExitCode {
    match ShapeDemo::new(config, layers).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bar;
    use crate::shaders;
    use shapelab_engine::coords::Vec2;

    #[test]
    fn default_config_is_a_white_600px_window() {
        let config = DemoConfig::new("test");
        assert_eq!(config.size, PhysicalSize::new(600, 600));
        assert_eq!(config.clear, Color::WHITE);
        let rc = config.runtime_config();
        assert_eq!(rc.title, "test");
        assert_eq!(rc.initial_size, config.size);
    }

    #[test]
    fn layers_keep_their_order() {
        let layers = vec![
            Layer::new(shaders::flat(), bar(Vec2::zero(), 1.0, 1.0), Topology::TriangleFan, Color::BLACK),
            Layer::new(shaders::wave(), bar(Vec2::zero(), 2.0, 2.0), Topology::TriangleFan, Color::WHITE),
        ];
        let demo = ShapeDemo::new(DemoConfig::new("order"), layers);
        assert_eq!(demo.layers[0].program.label(), "flat");
        assert_eq!(demo.layers[1].program.label(), "wave");
        assert!(demo.renderer.is_none());
    }
}

use std::rc::Rc;

use crate::paint::Color;
use crate::shader::ShaderProgram;

use super::ctx::RenderCtx;
use super::mesh::Mesh;
use super::pipeline::PipelineCache;
use super::topology::Topology;
use super::uniforms::DrawUniforms;

/// One registered (program, mesh, topology, color) tuple.
struct Drawable {
    pipeline: Rc<wgpu::RenderPipeline>,
    mesh: Mesh,
    color: Color,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws a fixed list of meshes in registration order.
///
/// Everything is created up front with [`ShapeRenderer::register`]; per frame
/// only the uniform blocks are rewritten.
pub struct ShapeRenderer {
    pipelines: PipelineCache,
    drawables: Vec<Drawable>,
}

impl ShapeRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        Self {
            pipelines: PipelineCache::new(device, surface_format),
            drawables: Vec::new(),
        }
    }

    /// Uploads `vertices` and appends a drawable. Draw order is registration
    /// order.
    pub fn register(
        &mut self,
        device: &wgpu::Device,
        program: &ShaderProgram,
        vertices: &[f32],
        topology: Topology,
        color: Color,
    ) {
        let index = self.drawables.len();
        let label = format!("{} #{index}", program.label());

        let mesh = Mesh::new(device, &label, vertices, topology);
        let pipeline = self.pipelines.get_or_create(device, program, topology);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} ubo")),
            size: DrawUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: self.pipelines.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::debug!(
            "registered \"{label}\": {} vertices as {topology:?}",
            mesh.vertex_count()
        );

        self.drawables.push(Drawable {
            pipeline,
            mesh,
            color,
            uniform_buffer,
            bind_group,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Number of distinct pipelines built so far.
    #[inline]
    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    /// Writes each drawable's color and the frame time.
    pub fn prepare(&self, ctx: &RenderCtx<'_>) {
        for d in &self.drawables {
            let uniforms = DrawUniforms::new(d.color, ctx.time);
            ctx.queue.write_buffer(&d.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        for d in &self.drawables {
            if d.mesh.is_empty() {
                continue;
            }
            rpass.set_pipeline(&d.pipeline);
            rpass.set_bind_group(0, &d.bind_group, &[]);
            d.mesh.draw(rpass);
        }
    }
}

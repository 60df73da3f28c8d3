use wgpu::util::DeviceExt;

use super::topology::Topology;

/// Floats per vertex in every geometry list (x, y, z).
pub const FLOATS_PER_VERTEX: usize = 3;

/// Vertex buffer description shared by every mesh: slot 0, one `vec3<f32>`
/// attribute at `@location(0)`, stride 12 bytes.
pub struct VertexLayout;

impl VertexLayout {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const STRIDE: u64 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64;

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Immutable geometry uploaded once.
///
/// Fans and loops carry an index buffer; other topologies draw the vertex
/// range directly. Empty meshes own no buffers and draw nothing.
#[derive(Debug)]
pub struct Mesh {
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
    /// Vertices (direct) or indices (indexed) submitted per draw.
    draw_count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[f32], topology: Topology) -> Self {
        if vertices.len() % FLOATS_PER_VERTEX != 0 {
            log::warn!(
                "mesh \"{label}\": {} floats is not a multiple of {FLOATS_PER_VERTEX}; trailing values ignored",
                vertices.len()
            );
        }
        let vertex_count = (vertices.len() / FLOATS_PER_VERTEX) as u32;
        let used = &vertices[..vertex_count as usize * FLOATS_PER_VERTEX];

        let indices = topology.index_list(vertex_count);
        let draw_count = match &indices {
            Some(idx) => idx.len() as u32,
            None => vertex_count,
        };

        if draw_count == 0 {
            log::debug!("mesh \"{label}\" ({topology:?}) has nothing to draw");
            return Self {
                vertex_buffer: None,
                index_buffer: None,
                vertex_count,
                draw_count: 0,
            };
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(used),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = indices.map(|idx| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(&idx),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vertex_buffer: Some(vertex_buffer),
            index_buffer,
            vertex_count,
            draw_count,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draw_count == 0
    }

    /// Binds slot 0 (and the index buffer, if any) and issues the draw.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(vbo) = self.vertex_buffer.as_ref() else { return };

        rpass.set_vertex_buffer(0, vbo.slice(..));
        match self.index_buffer.as_ref() {
            Some(ibo) => {
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.draw_count, 0, 0..1);
            }
            None => rpass.draw(0..self.draw_count, 0..1),
        }
    }
}

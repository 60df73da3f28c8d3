//! Draw layer.
//!
//! Geometry arrives as flat `f32` lists in NDC (3 floats per vertex) and is
//! uploaded once into a `Mesh`. Each registered drawable owns a uniform
//! buffer with its color and the elapsed time; pipelines are shared per
//! (program, topology).
//!
//! Convention:
//! - vertex slot 0, `@location(0) vec3<f32>`, stride 12 bytes
//! - uniform block at `@group(0) @binding(0)`, 32 bytes

mod ctx;
mod mesh;
mod pipeline;
mod renderer;
mod topology;
mod uniforms;

pub use ctx::RenderCtx;
pub use mesh::{Mesh, VertexLayout, FLOATS_PER_VERTEX};
pub use pipeline::PipelineCache;
pub use renderer::ShapeRenderer;
pub use topology::Topology;
pub use uniforms::DrawUniforms;

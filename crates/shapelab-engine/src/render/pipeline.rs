use std::collections::HashMap;
use std::rc::Rc;

use crate::shader::{ProgramId, ShaderProgram, FRAGMENT_ENTRY, VERTEX_ENTRY};

use super::mesh::VertexLayout;
use super::topology::Topology;
use super::uniforms::DrawUniforms;

/// Render pipelines keyed by (program, topology).
///
/// Every pipeline shares one bind group layout (the uniform block) and one
/// pipeline layout; only shader modules and primitive state differ.
pub struct PipelineCache {
    format: wgpu::TextureFormat,
    bind_group_layout: wgpu::BindGroupLayout,
    layout: wgpu::PipelineLayout,
    pipelines: HashMap<(ProgramId, Topology), Rc<wgpu::RenderPipeline>>,
}

impl PipelineCache {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shapelab uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(DrawUniforms::SIZE),
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shapelab pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        Self {
            format,
            bind_group_layout,
            layout,
            pipelines: HashMap::new(),
        }
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Returns the pipeline for `program` drawn as `topology`, building it on
    /// first use.
    pub fn get_or_create(
        &mut self,
        device: &wgpu::Device,
        program: &ShaderProgram,
        topology: Topology,
    ) -> Rc<wgpu::RenderPipeline> {
        let key = (program.id(), topology);
        if let Some(p) = self.pipelines.get(&key) {
            return Rc::clone(p);
        }

        log::debug!(
            "building pipeline for program \"{}\" ({}) as {topology:?}",
            program.label(),
            program.id().get()
        );

        let label = format!("{} {topology:?} pipeline", program.label());
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&label),
            layout: Some(&self.layout),
            vertex: wgpu::VertexState {
                module: program.vertex_module(),
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[VertexLayout::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: program.fragment_module(),
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: topology.primitive(),
                strip_index_format: topology.strip_index_format(),
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let pipeline = Rc::new(pipeline);
        self.pipelines.insert(key, Rc::clone(&pipeline));
        pipeline
    }
}

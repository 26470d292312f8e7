use wgpu::util::DeviceExt;

use crate::grid::GridDims;

use super::common::{
    GridUniform, QUAD_VERTEX_COUNT, QUAD_VERTICES, QuadVertex, grid_ubo_min_binding_size,
};
use super::{RenderCtx, RenderTarget};

/// Instanced grid renderer.
///
/// One instanced draw covers the whole grid: 6 vertices per instance,
/// `cols * rows` instances. The vertex stage reads the grid dimensions from
/// a uniform and computes each instance's cell offset; see
/// `grid::placement` for the CPU mirror of that transform.
pub struct GridRenderer {
    dims: GridDims,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    grid_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,

    warned_invalid_dims: bool,
}

impl GridRenderer {
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            grid_ubo: None,
            quad_vbo: None,
            warned_invalid_dims: false,
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Records the instanced grid draw into `target`.
    ///
    /// The target is expected to be cleared already; this pass loads the
    /// existing contents. Invalid (zero) dimensions skip the draw with a
    /// one-time debug message.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if !self.dims.is_valid() {
            if !self.warned_invalid_dims {
                log::debug!("GridRenderer: zero-sized grid {:?}; skipping", self.dims);
                self.warned_invalid_dims = true;
            }
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);
        self.ensure_bind_group(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cellgrid grid pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));

        // Always 6 vertices; only the instance count varies with the grid.
        rpass.draw(0..QUAD_VERTEX_COUNT, 0..self.dims.instances());
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cellgrid grid shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/grid.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cellgrid grid bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(grid_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("cellgrid grid pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cellgrid grid pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind group references the old layout; rebuild it lazily.
        self.bind_group = None;
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_none() {
            let quad_vbo = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cellgrid grid vertices"),
                    contents: bytemuck::cast_slice(&QUAD_VERTICES),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
            self.quad_vbo = Some(quad_vbo);
        }

        if self.grid_ubo.is_none() {
            // Written once at creation; read by every draw.
            let uniform = GridUniform::new(self.dims.cols, self.dims.rows);
            let grid_ubo = ctx
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cellgrid grid uniform"),
                    contents: bytemuck::bytes_of(&uniform),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
            self.grid_ubo = Some(grid_ubo);
        }
    }

    fn ensure_bind_group(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(grid_ubo) = self.grid_ubo.as_ref() else { return };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cellgrid grid bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: grid_ubo.as_entire_binding(),
            }],
        });

        self.bind_group = Some(bind_group);
    }
}

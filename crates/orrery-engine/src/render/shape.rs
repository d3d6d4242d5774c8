use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::geometry::{ShapeKind, ShapeSet};
use crate::render::{RenderCtx, RenderTarget};

use super::common::{
    model_ubo_min_binding_size, slot_capacity, slot_stride, ColorVertex, ModelUniform,
    PositionVertex, MODEL_UNIFORM_SIZE,
};

/// One shape drawn with one model matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub shape: ShapeKind,
    pub model: Mat4,
}

impl DrawCall {
    #[inline]
    pub fn new(shape: ShapeKind, model: impl Into<Mat4>) -> Self {
        Self { shape, model: model.into() }
    }
}

/// Draws shapes out of a [`ShapeSet`] uploaded once into static buffers.
///
/// GPU resources:
/// - position and color vertex buffers (two streams, same vertex indices)
/// - a triangle-list index buffer covering every shape
/// - a model-matrix uniform buffer with one dynamic-offset slot per draw
///
/// Draws are issued in slice order; later draws paint over earlier ones.
pub struct ShapeRenderer {
    shapes: ShapeSet,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    model_ubo: Option<wgpu::Buffer>,
    model_capacity: usize,
    model_stride: u64,

    position_vbo: Option<wgpu::Buffer>,
    color_vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,

    staging: Vec<u8>,
}

impl ShapeRenderer {
    pub fn new(shapes: ShapeSet) -> Self {
        Self {
            shapes,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            model_ubo: None,
            model_capacity: 0,
            model_stride: MODEL_UNIFORM_SIZE,
            position_vbo: None,
            color_vbo: None,
            ibo: None,
            staging: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draws: &[DrawCall],
    ) {
        if draws.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_model_capacity(ctx, draws.len());

        self.write_model_uniforms(ctx, draws);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(position_vbo) = self.position_vbo.as_ref() else { return };
        let Some(color_vbo) = self.color_vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("orrery shape pass"),
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
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);

        for (slot, draw) in draws.iter().enumerate() {
            let range = self.shapes.index_range(draw.shape);
            if range.count == 0 {
                continue;
            }
            let offset = slot as u64 * self.model_stride;
            rpass.set_bind_group(0, bind_group, &[offset as u32]);
            rpass.draw_indexed(range.as_range(), 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orrery shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("orrery shape bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: model_ubo_min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("orrery shape pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("orrery shape pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PositionVertex::layout(), ColorVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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

        log::debug!("shape pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.model_ubo = None;
        self.model_capacity = 0;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.position_vbo.is_some() && self.color_vbo.is_some() && self.ibo.is_some() {
            return;
        }

        let positions: Vec<PositionVertex> = self
            .shapes
            .positions()
            .iter()
            .map(|&pos| PositionVertex { pos })
            .collect();
        let colors: Vec<ColorVertex> = self
            .shapes
            .colors()
            .iter()
            .map(|&rgb| ColorVertex { rgb })
            .collect();
        let (indices, _) = self.shapes.triangle_indices();

        self.position_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orrery shape position vbo"),
            contents: bytemuck::cast_slice(&positions),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.color_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orrery shape color vbo"),
            contents: bytemuck::cast_slice(&colors),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orrery shape ibo"),
            contents: bytemuck::cast_slice(&pad_to_copy_alignment(indices)),
            usage: wgpu::BufferUsages::INDEX,
        }));

        log::debug!(
            "uploaded {} vertices for {} shapes",
            self.shapes.vertex_count(),
            ShapeKind::ALL.len()
        );
    }

    fn ensure_model_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.model_capacity && self.model_ubo.is_some() && self.bind_group.is_some()
        {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let stride = slot_stride(ctx.device.limits().min_uniform_buffer_offset_alignment);
        let capacity = slot_capacity(required.max(self.model_capacity));

        let model_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("orrery shape model ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orrery shape bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_ubo,
                    offset: 0,
                    size: model_ubo_min_binding_size(),
                }),
            }],
        });

        log::debug!("model uniform buffer sized for {capacity} draws (stride {stride})");

        self.model_stride = stride;
        self.model_capacity = capacity;
        self.model_ubo = Some(model_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_model_uniforms(&mut self, ctx: &RenderCtx<'_>, draws: &[DrawCall]) {
        let Some(ubo) = self.model_ubo.as_ref() else { return };

        let stride = self.model_stride as usize;
        let count = draws.len().min(self.model_capacity);

        self.staging.clear();
        self.staging.resize(stride * count, 0);

        for (slot, draw) in draws.iter().take(count).enumerate() {
            let uniform = ModelUniform {
                matrix: draw.model.to_cols_array_2d(),
            };
            let at = slot * stride;
            self.staging[at..at + MODEL_UNIFORM_SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&uniform));
        }

        ctx.queue.write_buffer(ubo, 0, &self.staging);
    }
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self::new(ShapeSet::standard())
    }
}

/// `u16` index data must be padded to a 4-byte multiple for buffer copies.
fn pad_to_copy_alignment(mut indices: Vec<u16>) -> Vec<u16> {
    if indices.len() % 2 != 0 {
        indices.push(0);
    }
    indices
}

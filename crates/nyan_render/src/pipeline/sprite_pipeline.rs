//! Render pipeline for textured sprites
//!
//! Every sprite is the same unit quad. Each sprite slot owns a uniform
//! buffer holding its model matrix (plus the shared view/projection), and
//! each draw binds the slot's uniforms together with a sprite texture.

use wgpu::util::DeviceExt;

use super::types::{SpriteUniforms, SpriteVertex, QUAD_VERTEX_COUNT, QUAD_VERTICES};
use crate::texture::SpriteTexture;

/// One sprite to draw: which uniform slot and which texture
#[derive(Clone, Copy)]
pub struct SpriteDraw<'a> {
    pub slot: usize,
    pub texture: &'a SpriteTexture,
}

/// Uniform buffer and bind group of one sprite slot
struct SpriteSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Render pipeline for alpha-blended textured quads
pub struct SpritePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Layout for a sprite texture + sampler (group 1)
    texture_bind_group_layout: wgpu::BindGroupLayout,
    /// Shared unit quad
    vertex_buffer: wgpu::Buffer,
    /// Per-sprite uniforms (group 0)
    slots: Vec<SpriteSlot>,
}

impl SpritePipeline {
    /// Create a new sprite pipeline with `sprite_count` uniform slots
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, sprite_count: usize) -> Self {
        let uniform_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Uniform Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let texture_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/sprite.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // the star spins about Y and shows its back face
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let slots = (0..sprite_count)
            .map(|i| {
                let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Sprite Uniform Buffer {}", i)),
                    contents: bytemuck::bytes_of(&SpriteUniforms::default()),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("Sprite Uniform Bind Group {}", i)),
                    layout: &uniform_bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: uniform_buffer.as_entire_binding(),
                        },
                    ],
                });
                SpriteSlot {
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        Self {
            pipeline,
            texture_bind_group_layout,
            vertex_buffer,
            slots,
        }
    }

    /// Get the vertex buffer layout for SpriteVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // tex_coords: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Layout that sprite textures must be bound with
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }

    /// Upload the uniforms of one sprite slot
    ///
    /// Out-of-range slots are ignored with a warning.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, slot: usize, uniforms: &SpriteUniforms) {
        match self.slots.get(slot) {
            Some(s) => queue.write_buffer(&s.uniform_buffer, 0, bytemuck::bytes_of(uniforms)),
            None => log::warn!("Sprite slot {} out of range ({} slots)", slot, self.slots.len()),
        }
    }

    /// Clear the target and draw the sprites in order
    ///
    /// Later draws blend over earlier ones.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
        draws: &[SpriteDraw<'_>],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        for draw in draws {
            let Some(slot) = self.slots.get(draw.slot) else {
                log::warn!("Skipping draw for missing sprite slot {}", draw.slot);
                continue;
            };
            render_pass.set_bind_group(0, &slot.bind_group, &[]);
            render_pass.set_bind_group(1, draw.texture.bind_group(), &[]);
            render_pass.draw(0..QUAD_VERTEX_COUNT, 0..1);
        }
    }
}

/// Helper to create the scene's orthographic projection matrix
pub fn orthographic_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    nyan_math::mat4::orthographic(left, right, bottom, top, near, far)
}

//! Sprite textures
//!
//! A `SpriteTexture` is a decoded image copied to the GPU, sampled with
//! nearest filtering so pixel art stays crisp.

use nyan_core::ImageData;

/// Texel format of sprite textures (matches the non-sRGB surface)
pub const SPRITE_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// GPU texture, view, sampler, and the bind group tying them together
pub struct SpriteTexture {
    #[allow(dead_code)] // kept alive for the view
    texture: wgpu::Texture,
    #[allow(dead_code)] // referenced by the bind group
    view: wgpu::TextureView,
    #[allow(dead_code)] // referenced by the bind group
    sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
}

impl SpriteTexture {
    /// Upload `image` and bind it with `layout` (see
    /// [`SpritePipeline::texture_bind_group_layout`](crate::SpritePipeline::texture_bind_group_layout))
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &ImageData,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SPRITE_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.bytes_per_row()),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::info!("Uploaded texture '{}' ({}x{})", label, image.width, image.height);

        Self {
            texture,
            view,
            sampler,
            bind_group,
        }
    }

    /// Bind group for group 1 of the sprite pipeline
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

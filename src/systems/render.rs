//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The sprite pipeline and both sprite textures
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use nyan_core::{load_image, AssetError, FrameTransforms};
use nyan_math::mat4::IDENTITY;
use nyan_render::{
    context::{ContextError, RenderContext},
    pipeline::{SpriteDraw, SpritePipeline, SpriteUniforms},
    texture::SpriteTexture,
};
use crate::config::{AssetConfig, RenderingConfig};

/// Uniform slot of the cat sprite
pub const CAT_SLOT: usize = 0;
/// Uniform slot of the star sprite
pub const STAR_SLOT: usize = 1;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// The GPU context could not be created
    Context(ContextError),
    /// A sprite image could not be loaded
    Texture(AssetError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(err) => write!(f, "GPU context error: {}", err),
            RenderError::Texture(err) => write!(f, "Texture load failed: {}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(err) => Some(err),
            RenderError::Texture(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(err: ContextError) -> Self {
        RenderError::Context(err)
    }
}

impl From<AssetError> for RenderError {
    fn from(err: AssetError) -> Self {
        RenderError::Texture(err)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: SpritePipeline,
    cat_texture: SpriteTexture,
    star_texture: SpriteTexture,
    render_config: RenderingConfig,
    projection_matrix: [[f32; 4]; 4],
}

impl RenderSystem {
    /// Create render system from window and config, loading both sprites
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        assets: &AssetConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = SpritePipeline::new(&context.device, context.format(), 2);

        let cat_image = load_image(&assets.cat_sprite)?;
        let star_image = load_image(&assets.star_sprite)?;

        let layout = pipeline.texture_bind_group_layout();
        let cat_texture = SpriteTexture::from_image(&context.device, &context.queue, layout, &cat_image, "Nyan Cat Texture");
        let star_texture = SpriteTexture::from_image(&context.device, &context.queue, layout, &star_image, "Star Texture");

        let projection_matrix = render_config.projection_matrix();

        Ok(Self {
            context,
            pipeline,
            cat_texture,
            star_texture,
            render_config,
            projection_matrix,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame: cat first, then the star on top
    pub fn render_frame(&mut self, transforms: &FrameTransforms) -> Result<(), RenderError> {
        let queue = &self.context.queue;
        self.pipeline.update_uniforms(
            queue,
            CAT_SLOT,
            &SpriteUniforms::new(transforms.cat, IDENTITY, self.projection_matrix),
        );
        self.pipeline.update_uniforms(
            queue,
            STAR_SLOT,
            &SpriteUniforms::new(transforms.star, IDENTITY, self.projection_matrix),
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        let draws = [
            SpriteDraw { slot: CAT_SLOT, texture: &self.cat_texture },
            SpriteDraw { slot: STAR_SLOT, texture: &self.star_texture },
        ];
        self.pipeline.render(
            &mut encoder,
            &view,
            self.render_config.clear_color(),
            &draws,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

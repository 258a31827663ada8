//! Sprite Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws textured quads
//! with per-sprite model matrices under an orthographic camera.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`texture::SpriteTexture`] - GPU copy of a decoded sprite image
//! - [`pipeline::SpritePipeline`] - Textured quad rendering with alpha blending

pub mod context;
pub mod texture;
pub mod pipeline;

// Re-export core types for convenience
pub use nyan_core::{ImageData, FrameTransforms};
pub use nyan_math::Mat4;

pub use context::{RenderContext, ContextError};
pub use texture::SpriteTexture;
pub use pipeline::{SpritePipeline, SpriteDraw, SpriteUniforms, SpriteVertex};

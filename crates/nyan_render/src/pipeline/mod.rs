//! Rendering pipeline components
//!
//! This module contains the textured sprite pipeline and its GPU types.

pub mod types;
pub mod sprite_pipeline;

// Re-export types
pub use types::{SpriteVertex, SpriteUniforms, QUAD_VERTICES, QUAD_VERTEX_COUNT};

// Re-export pipelines
pub use sprite_pipeline::{SpritePipeline, SpriteDraw, orthographic_matrix};

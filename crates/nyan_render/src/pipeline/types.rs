//! GPU-compatible data types for the sprite pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use nyan_math::mat4::IDENTITY;

/// A quad corner: 2D position plus texture coordinate
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Position in sprite-local space, the quad spans `[-0.5, 0.5]`
    pub position: [f32; 2],
    /// UV, with v = 0 at the top row of the image
    pub tex_coords: [f32; 2],
}

impl SpriteVertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 2], tex_coords: [f32; 2]) -> Self {
        Self { position, tex_coords }
    }
}

/// Number of vertices drawn per sprite (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Unit quad centred on the origin, counter-clockwise, UVs covering the full texture
pub const QUAD_VERTICES: [SpriteVertex; QUAD_VERTEX_COUNT as usize] = [
    // triangle 1
    SpriteVertex::new([-0.5, -0.5], [0.0, 1.0]),
    SpriteVertex::new([0.5, -0.5], [1.0, 1.0]),
    SpriteVertex::new([0.5, 0.5], [1.0, 0.0]),
    // triangle 2
    SpriteVertex::new([-0.5, -0.5], [0.0, 1.0]),
    SpriteVertex::new([0.5, 0.5], [1.0, 0.0]),
    SpriteVertex::new([-0.5, 0.5], [0.0, 0.0]),
];

/// Per-sprite uniforms
/// Layout: 192 bytes total (must match sprite.wgsl SpriteUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteUniforms {
    /// Model matrix (64 bytes)
    pub model_matrix: [[f32; 4]; 4],
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
}

impl SpriteUniforms {
    /// Uniforms for one sprite under a shared camera
    pub fn new(model_matrix: [[f32; 4]; 4], view_matrix: [[f32; 4]; 4], projection_matrix: [[f32; 4]; 4]) -> Self {
        Self {
            model_matrix,
            view_matrix,
            projection_matrix,
        }
    }
}

impl Default for SpriteUniforms {
    fn default() -> Self {
        Self {
            model_matrix: IDENTITY,
            view_matrix: IDENTITY,
            projection_matrix: IDENTITY,
        }
    }
}

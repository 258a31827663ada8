//! 2D/3D Mathematics Library
//!
//! This crate provides the vector and matrix types used by the sprite scene.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - Column-major 4x4 matrix for model, view and projection transforms

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;

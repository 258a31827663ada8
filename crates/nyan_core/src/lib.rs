//! Core types for the Nyan scene
//!
//! This crate holds everything that does not need a window or a GPU:
//!
//! - [`Transform2D`] - Translation, axis rotation, and scale with explicit parenting
//! - [`MotionParams`] - Closed-form motion of the cat and its orbiting star
//! - [`SpriteScene`] - Per-frame scene state (run status, clock, phases, matrices)
//! - [`ImageData`] - Decoded RGBA sprite pixels
//! - [`AssetError`] - Error type for sprite loading

mod transform;
mod motion;
mod scene;
mod asset;
mod asset_error;

pub use transform::Transform2D;
pub use motion::MotionParams;
pub use scene::{SpriteScene, RunStatus, FrameTransforms};
pub use asset::{ImageData, load_image, decode_image};
pub use asset_error::AssetError;

// Re-export commonly used types from nyan_math for convenience
pub use nyan_math::{Vec3, Mat4};

//! 2D Transform (translation, rotation, scale)
//!
//! A Transform2D is the local placement of a sprite. Sprites that move
//! relative to another sprite compose their local matrix under the parent's
//! world matrix with [`Transform2D::world_matrix`].

use nyan_math::{mat4, Mat4, Vec3};

/// A sprite transform with translation, axis-angle rotation, and non-uniform scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Offset from the parent origin
    pub translation: Vec3,
    /// Rotation axis (normalized when the matrix is built)
    pub rotation_axis: Vec3,
    /// Rotation angle in radians
    pub rotation_angle: f32,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_axis: Vec3::Z,
            rotation_angle: 0.0,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Replace the rotation
    pub fn with_rotation(mut self, axis: Vec3, angle: f32) -> Self {
        self.rotation_axis = axis;
        self.rotation_angle = angle;
        self
    }

    /// Replace the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local model matrix: `translate * rotate * scale`
    ///
    /// Vertices are scaled first, then rotated, then translated.
    pub fn to_matrix(&self) -> Mat4 {
        let tr = mat4::mul(
            mat4::translation(self.translation),
            mat4::rotation_axis(self.rotation_axis, self.rotation_angle),
        );
        mat4::mul(tr, mat4::scaling(self.scale))
    }

    /// World matrix of this transform placed under `parent`.
    ///
    /// With no parent the local matrix is already the world matrix.
    /// Otherwise the result is `parent * local`, so the child inherits the
    /// parent's translation, rotation and scale.
    pub fn world_matrix(&self, parent: Option<&Mat4>) -> Mat4 {
        match parent {
            Some(parent) => mat4::mul(*parent, self.to_matrix()),
            None => self.to_matrix(),
        }
    }

    /// Transform a point from local space into the parent's space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(self.to_matrix(), p)
    }
}

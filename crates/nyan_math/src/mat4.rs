//! 4x4 Matrix utilities for sprite transforms
//!
//! Matrices are column-major (`m[column][row]`), the same layout WGSL expects
//! for a `mat4x4<f32>` uniform, so they can be uploaded without transposing.
//!
//! Builders follow the usual right-multiplication convention: to get
//! "translate, then rotate, then scale" in the code's reading order, compose
//! `mul(mul(translation(t), rotation_axis(a, r)), scaling(s))`. The scale is
//! applied to the vertex first.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn scaling(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Rotation of `angle` radians about an arbitrary axis (right-handed).
///
/// The axis is normalized here; a zero axis yields the identity.
///
/// # Example
/// ```
/// use nyan_math::{Vec3, mat4::rotation_axis};
/// // Spin a sprite about the vertical axis
/// let spin = rotation_axis(Vec3::Y, 0.5);
/// ```
pub fn rotation_axis(axis: Vec3, angle: f32) -> Mat4 {
    let a = axis.normalized();
    if a == Vec3::ZERO {
        return IDENTITY;
    }

    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        [t * a.x * a.x + c, t * a.x * a.y + s * a.z, t * a.x * a.z - s * a.y, 0.0],
        [t * a.x * a.y - s * a.z, t * a.y * a.y + c, t * a.y * a.z + s * a.x, 0.0],
        [t * a.x * a.z + s * a.y, t * a.y * a.z - s * a.x, t * a.z * a.z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Orthographic projection for a right-handed view volume.
///
/// Maps x from `[left, right]` and y from `[bottom, top]` to `[-1, 1]`, and
/// z from `[-near, -far]` to wgpu's `[0, 1]` clip depth.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = 1.0 / (right - left);
    let tb = 1.0 / (top - bottom);
    let fn_ = 1.0 / (far - near);

    [
        [2.0 * rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 * tb, 0.0, 0.0],
        [0.0, 0.0, -fn_, 0.0],
        [-(right + left) * rl, -(top + bottom) * tb, -near * fn_, 1.0],
    ]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (implicit w = 1) by a 4x4 matrix
///
/// result = M * (p, 1), with the homogeneous divide skipped since the
/// matrices built here are affine or orthographic.
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Translation part of an affine matrix
pub fn get_translation(m: Mat4) -> Vec3 {
    Vec3::new(m[3][0], m[3][1], m[3][2])
}

/// Element-wise comparison within `epsilon`
pub fn approx_eq(a: Mat4, b: Mat4, epsilon: f32) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).abs() <= epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_translation() {
        let m = translation(Vec3::new(1.0, -2.0, 0.5));
        let result = transform_point(m, Vec3::ZERO);
        assert!(vec_approx_eq(result, Vec3::new(1.0, -2.0, 0.5)));
        assert!(vec_approx_eq(get_translation(m), Vec3::new(1.0, -2.0, 0.5)));
    }

    #[test]
    fn test_scaling() {
        let m = scaling(Vec3::new(3.46, 1.0, 0.0));
        let result = transform_point(m, Vec3::new(0.5, 0.5, 1.0));
        assert!(vec_approx_eq(result, Vec3::new(1.73, 0.5, 0.0)));
    }

    #[test]
    fn test_rotation_z() {
        // 90° about Z: X goes to Y
        let m = rotation_axis(Vec3::Z, FRAC_PI_2);
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::Y), "X should become Y, got {:?}", result);
    }

    #[test]
    fn test_rotation_y() {
        // 90° about Y: X goes to -Z, Y unchanged
        let m = rotation_axis(Vec3::Y, FRAC_PI_2);
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, -Vec3::Z), "X should become -Z, got {:?}", result);

        let result = transform_point(m, Vec3::Y);
        assert!(vec_approx_eq(result, Vec3::Y));
    }

    #[test]
    fn test_rotation_zero_axis_is_identity() {
        assert!(approx_eq(rotation_axis(Vec3::ZERO, 1.0), IDENTITY, EPSILON));
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation_axis(Vec3::Z, 0.5);
        assert!(approx_eq(mul(IDENTITY, a), a, EPSILON));
        assert!(approx_eq(mul(a, IDENTITY), a, EPSILON));
    }

    #[test]
    fn test_mul_applies_right_first() {
        // translate * scale: the point is scaled, then moved
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), scaling(Vec3::new(2.0, 2.0, 2.0)));
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(12.0, 0.0, 0.0)), "got {:?}", result);

        // scale * translate: the point is moved, then scaled
        let m = mul(scaling(Vec3::new(2.0, 2.0, 2.0)), translation(Vec3::new(10.0, 0.0, 0.0)));
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(22.0, 0.0, 0.0)), "got {:?}", result);
    }

    #[test]
    fn test_orthographic_corners() {
        let m = orthographic(-5.0, 5.0, -3.75, 3.75, -1.0, 1.0);

        let bottom_left = transform_point(m, Vec3::new(-5.0, -3.75, 0.0));
        assert!(vec_approx_eq(bottom_left, Vec3::new(-1.0, -1.0, 0.5)), "got {:?}", bottom_left);

        let top_right = transform_point(m, Vec3::new(5.0, 3.75, 0.0));
        assert!(vec_approx_eq(top_right, Vec3::new(1.0, 1.0, 0.5)), "got {:?}", top_right);

        let center = transform_point(m, Vec3::ZERO);
        assert!(vec_approx_eq(center, Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_orthographic_depth_range() {
        let m = orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        // z = -near maps to 0, z = -far maps to 1
        assert!(approx(transform_point(m, Vec3::new(0.0, 0.0, 1.0)).z, 0.0));
        assert!(approx(transform_point(m, Vec3::new(0.0, 0.0, -1.0)).z, 1.0));
    }
}

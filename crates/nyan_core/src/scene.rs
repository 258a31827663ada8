//! Sprite scene state
//!
//! A `SpriteScene` owns everything that changes from frame to frame: the run
//! status, the previous frame timestamp, the star's accumulated orbit and
//! spin angles, and the two model matrices derived from them.
//!
//! The star is parented to the cat: its world matrix is the cat's world
//! matrix composed with the star's local transform.

use std::f32::consts::TAU;

use nyan_math::{mat4, Mat4};

use crate::{MotionParams, Transform2D};

/// Whether the main loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Frames are being updated and drawn
    Running,
    /// A quit signal was seen; terminal
    Terminated,
}

/// Model matrices produced by one update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransforms {
    /// Cat world matrix
    pub cat: Mat4,
    /// Star world matrix (already composed under the cat)
    pub star: Mat4,
}

/// Wrap an angle into `[0, TAU)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `TAU`, which is
/// folded back to zero.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// The scene: two animated sprites and the loop status
#[derive(Clone, Debug)]
pub struct SpriteScene {
    params: MotionParams,
    status: RunStatus,
    /// Timestamp of the previous update, in seconds
    previous_ticks: f32,
    /// Star orbit angle, wrapped to `[0, TAU)`
    star_angle: f32,
    /// Star spin angle, wrapped to `[0, TAU)`
    star_spin: f32,
    cat: Transform2D,
    /// Star placement relative to the cat
    star: Transform2D,
    cat_matrix: Mat4,
    star_matrix: Mat4,
    frame_count: u64,
}

impl SpriteScene {
    /// Create a scene in its rest pose.
    ///
    /// The cat sits at the origin with its base scale. The star sits at orbit
    /// angle 0 under the cat, with no spin and the pulse evaluated at `t = 0`.
    pub fn new(params: MotionParams) -> Self {
        let cat = Transform2D::identity().with_scale(params.cat_scale);
        let star = Transform2D::from_translation(params.orbit_offset(0.0))
            .with_rotation(params.spin_axis, 0.0)
            .with_scale(params.star_scale(0.0));

        let cat_matrix = cat.world_matrix(None);
        let star_matrix = star.world_matrix(Some(&cat_matrix));

        Self {
            params,
            status: RunStatus::Running,
            previous_ticks: 0.0,
            star_angle: 0.0,
            star_spin: 0.0,
            cat,
            star,
            cat_matrix,
            star_matrix,
            frame_count: 0,
        }
    }

    /// Advance the scene to `ticks` seconds since start-up.
    ///
    /// Returns the new model matrices, or `None` once the scene has been
    /// terminated; a terminated scene is never updated again.
    pub fn update(&mut self, ticks: f32) -> Option<FrameTransforms> {
        if self.status == RunStatus::Terminated {
            return None;
        }

        let delta_time = ticks - self.previous_ticks;
        self.previous_ticks = ticks;

        let p = &self.params;
        self.star_spin = wrap_angle(self.star_spin + p.spin_speed * delta_time);
        self.star_angle = wrap_angle(self.star_angle + p.orbit_speed * delta_time);

        self.cat = Transform2D::from_translation(p.cat_offset(ticks)).with_scale(p.cat_scale);
        self.star = Transform2D::from_translation(p.orbit_offset(self.star_angle))
            .with_rotation(p.spin_axis, self.star_spin)
            .with_scale(p.star_scale(ticks));

        self.cat_matrix = self.cat.world_matrix(None);
        self.star_matrix = self.star.world_matrix(Some(&self.cat_matrix));
        self.frame_count += 1;

        log::trace!(
            "frame {}: dt={:.4}s orbit={:.3} spin={:.3}",
            self.frame_count,
            delta_time,
            self.star_angle,
            self.star_spin
        );

        Some(self.transforms())
    }

    /// Mark the scene as terminated.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn request_quit(&mut self) -> bool {
        match self.status {
            RunStatus::Running => {
                self.status = RunStatus::Terminated;
                log::info!("Quit requested after {} frames", self.frame_count);
                true
            }
            RunStatus::Terminated => false,
        }
    }

    /// Current run status
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Whether frames should still be updated and drawn
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Current model matrices
    pub fn transforms(&self) -> FrameTransforms {
        FrameTransforms {
            cat: self.cat_matrix,
            star: self.star_matrix,
        }
    }

    /// Cat world matrix
    pub fn cat_matrix(&self) -> Mat4 {
        self.cat_matrix
    }

    /// Star world matrix
    pub fn star_matrix(&self) -> Mat4 {
        self.star_matrix
    }

    /// Star transform relative to the cat
    pub fn star_transform(&self) -> &Transform2D {
        &self.star
    }

    /// Star orbit angle in `[0, TAU)`
    pub fn star_angle(&self) -> f32 {
        self.star_angle
    }

    /// Star spin angle in `[0, TAU)`
    pub fn star_spin(&self) -> f32 {
        self.star_spin
    }

    /// Timestamp of the last update, in seconds
    pub fn previous_ticks(&self) -> f32 {
        self.previous_ticks
    }

    /// Number of updates performed
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Motion constants
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Cat position in world space
    pub fn cat_position(&self) -> nyan_math::Vec3 {
        mat4::get_translation(self.cat_matrix)
    }

    /// Star position in world space
    pub fn star_position(&self) -> nyan_math::Vec3 {
        mat4::get_translation(self.star_matrix)
    }
}

impl Default for SpriteScene {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyan_math::Vec3;

    const EPSILON: f32 = 1e-4;

    /// Smallest signed difference between two wrapped angles
    fn angle_diff(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        if d > TAU / 2.0 { d - TAU } else { d }
    }

    #[test]
    fn test_rest_pose_cat_is_base_scale() {
        let scene = SpriteScene::default();
        let expected = mat4::scaling(scene.params().cat_scale);
        assert!(mat4::approx_eq(scene.cat_matrix(), expected, EPSILON));
        assert_eq!(scene.cat_position(), Vec3::ZERO);
    }

    #[test]
    fn test_rest_pose_star_is_parented_at_angle_zero() {
        let scene = SpriteScene::default();
        let params = *scene.params();

        let local = Transform2D::from_translation(params.orbit_offset(0.0))
            .with_scale(params.star_scale(0.0));
        let expected = mat4::mul(scene.cat_matrix(), local.to_matrix());
        assert!(mat4::approx_eq(scene.star_matrix(), expected, EPSILON));

        // orbit (1, 0) stretched by the cat's x scale
        let pos = scene.star_position();
        assert!((pos.x - params.cat_scale.x * params.orbit_radius).abs() < EPSILON);
        assert!(pos.y.abs() < EPSILON);
    }

    #[test]
    fn test_update_cat_stays_within_amplitude() {
        let mut scene = SpriteScene::default();
        let amplitude = scene.params().cat_amplitude;
        for i in 1..500 {
            let t = i as f32 / 60.0;
            scene.update(t);
            assert!(scene.cat_position().length() <= amplitude + EPSILON);
        }
    }

    #[test]
    fn test_orbit_angle_tracks_delta_time() {
        let mut scene = SpriteScene::default();
        let speed = scene.params().orbit_speed;

        let mut ticks = 0.0f32;
        let mut previous = scene.star_angle();
        for i in 0..400 {
            // uneven frame times
            let dt = if i % 3 == 0 { 0.05 } else { 1.0 / 60.0 };
            ticks += dt;
            scene.update(ticks);

            let angle = scene.star_angle();
            assert!((0.0..TAU).contains(&angle), "angle {} not wrapped", angle);

            // each step advances by speed * dt (modulo a full turn)
            let step = angle_diff(angle, previous);
            assert!(step > 0.0, "orbit must advance, step was {}", step);
            assert!((step - speed * dt).abs() < EPSILON, "step {} vs {}", step, speed * dt);
            previous = angle;
        }

        // total orbit matches the total elapsed time, wrapped
        let expected = (speed * ticks).rem_euclid(TAU);
        assert!(angle_diff(scene.star_angle(), expected).abs() < 1e-3);
    }

    #[test]
    fn test_star_follows_cat() {
        let mut scene = SpriteScene::default();
        let transforms = scene.update(1.25).unwrap();

        let local = scene.star_transform().to_matrix();
        let expected = mat4::mul(transforms.cat, local);
        assert!(mat4::approx_eq(transforms.star, expected, EPSILON));
    }

    #[test]
    fn test_spin_accumulates() {
        let mut scene = SpriteScene::default();
        scene.update(0.5);
        // spin speed is negative, so the wrapped angle is TAU - 0.5
        assert!((scene.star_spin() - (TAU - 0.5)).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_angle_stays_below_tau() {
        assert_eq!(wrap_angle(-1e-8), 0.0);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < EPSILON);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_angles_wrapped_with_tiny_negative_steps() {
        let params = MotionParams {
            orbit_speed: -1.0,
            ..MotionParams::default()
        };
        assert!(params.spin_speed < 0.0);

        let mut scene = SpriteScene::new(params);
        let mut ticks = 0.0f32;
        for _ in 0..100 {
            ticks += 1e-8;
            scene.update(ticks);
            assert!((0.0..TAU).contains(&scene.star_spin()), "spin {}", scene.star_spin());
            assert!((0.0..TAU).contains(&scene.star_angle()), "orbit {}", scene.star_angle());
        }

        scene.update(1e-7);
        assert!((0.0..TAU).contains(&scene.star_spin()));
    }

    #[test]
    fn test_quit_transitions_exactly_once() {
        let mut scene = SpriteScene::default();
        assert_eq!(scene.status(), RunStatus::Running);
        assert!(scene.update(0.1).is_some());

        assert!(scene.is_running());
        assert!(scene.request_quit());
        assert_eq!(scene.status(), RunStatus::Terminated);
        assert!(!scene.is_running());
        assert!(!scene.request_quit());
        assert_eq!(scene.status(), RunStatus::Terminated);
    }

    #[test]
    fn test_no_update_after_quit() {
        let mut scene = SpriteScene::default();
        scene.update(0.1);
        let frozen = scene.transforms();
        let frames = scene.frame_count();

        scene.request_quit();
        assert!(scene.update(0.2).is_none());
        assert!(scene.update(5.0).is_none());

        assert_eq!(scene.frame_count(), frames);
        assert_eq!(scene.transforms(), frozen);
        assert!((scene.previous_ticks() - 0.1).abs() < EPSILON);
    }
}

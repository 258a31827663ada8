//! Closed-form sprite motion
//!
//! The cat bobs on a small circle around the origin. The star orbits the
//! cat, spins about a configurable axis, and pulses in size. Everything here
//! is a pure function of time or of an accumulated angle.

use nyan_math::Vec3;

/// Motion constants for the two sprites
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Base scale of the cat sprite (its quad is unit-sized)
    pub cat_scale: Vec3,
    /// Angular speed of the cat's bob (radians per second)
    pub cat_speed: f32,
    /// Radius of the cat's bob
    pub cat_amplitude: f32,
    /// Distance of the star from the cat, in the cat's local units
    pub orbit_radius: f32,
    /// Angular speed of the star's orbit (radians per second)
    pub orbit_speed: f32,
    /// Axis the star spins about
    pub spin_axis: Vec3,
    /// Spin speed of the star (radians per second)
    pub spin_speed: f32,
    /// Mean pulse scale of the star
    pub pulse_base: f32,
    /// Pulse deviation from the mean
    pub pulse_amplitude: f32,
    /// Pulse angular frequency (radians per second)
    pub pulse_frequency: f32,
    /// Divisor applied to the star's horizontal pulse.
    ///
    /// The star inherits the cat's wide scale, so its x is squeezed by the
    /// cat's aspect to keep it from stretching. Non-positive values disable
    /// the correction.
    pub aspect_correction: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            cat_scale: Vec3::new(3.46, 1.0, 0.0),
            cat_speed: 6.0,
            cat_amplitude: 0.1,
            orbit_radius: 1.0,
            orbit_speed: 1.0,
            spin_axis: Vec3::Y,
            spin_speed: -1.0,
            pulse_base: 0.4,
            pulse_amplitude: 0.3,
            pulse_frequency: 5.0,
            aspect_correction: 3.46,
        }
    }
}

impl MotionParams {
    /// Cat offset from the origin at elapsed time `t` (seconds)
    ///
    /// Cosine drives x and sine drives y, so the offset always lies on the
    /// circle of radius `cat_amplitude`.
    pub fn cat_offset(&self, t: f32) -> Vec3 {
        let phase = t * self.cat_speed;
        Vec3::new(
            self.cat_amplitude * phase.cos(),
            self.cat_amplitude * phase.sin(),
            0.0,
        )
    }

    /// Star offset from the cat for a given orbit angle
    pub fn orbit_offset(&self, angle: f32) -> Vec3 {
        Vec3::new(
            self.orbit_radius * angle.cos(),
            self.orbit_radius * angle.sin(),
            0.0,
        )
    }

    /// Star pulse factor at elapsed time `t`
    pub fn pulse_factor(&self, t: f32) -> f32 {
        self.pulse_base + self.pulse_amplitude * (t * self.pulse_frequency).sin()
    }

    /// Inclusive `(min, max)` range of [`pulse_factor`](Self::pulse_factor)
    pub fn pulse_bounds(&self) -> (f32, f32) {
        let amp = self.pulse_amplitude.abs();
        (self.pulse_base - amp, self.pulse_base + amp)
    }

    /// Star local scale at elapsed time `t`, with the aspect correction on x
    pub fn star_scale(&self, t: f32) -> Vec3 {
        let pulse = self.pulse_factor(t);
        let aspect = if self.aspect_correction > 0.0 {
            self.aspect_correction
        } else {
            1.0
        };
        Vec3::new(pulse / aspect, pulse, pulse)
    }
}

//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NYAN_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use nyan_core::{MotionParams, Vec3};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Sprite motion configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Sprite image paths
    #[serde(default)]
    pub assets: AssetConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NYAN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // NYAN_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("NYAN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in physical pixels
    pub width: u32,
    /// Window height in physical pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nyan Cat!".to_string(),
            width: 1280,
            height: 960,
            vsync: true,
        }
    }
}

/// Sprite motion configuration
///
/// Mirrors [`MotionParams`]; vectors are stored as arrays so they read
/// naturally in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Cat base scale [x, y, z]
    pub cat_scale: [f32; 3],
    /// Cat bob angular speed (radians per second)
    pub cat_speed: f32,
    /// Cat bob radius
    pub cat_amplitude: f32,
    /// Star orbit radius around the cat
    pub orbit_radius: f32,
    /// Star orbit angular speed (radians per second)
    pub orbit_speed: f32,
    /// Star spin axis [x, y, z]
    pub star_spin_axis: [f32; 3],
    /// Star spin speed (radians per second)
    pub star_spin_speed: f32,
    /// Mean star pulse scale
    pub pulse_base: f32,
    /// Star pulse deviation
    pub pulse_amplitude: f32,
    /// Star pulse angular frequency (radians per second)
    pub pulse_frequency: f32,
    /// Divisor for the star's horizontal pulse (0 disables)
    pub star_aspect_correction: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let p = MotionParams::default();
        Self {
            cat_scale: p.cat_scale.to_array(),
            cat_speed: p.cat_speed,
            cat_amplitude: p.cat_amplitude,
            orbit_radius: p.orbit_radius,
            orbit_speed: p.orbit_speed,
            star_spin_axis: p.spin_axis.to_array(),
            star_spin_speed: p.spin_speed,
            pulse_base: p.pulse_base,
            pulse_amplitude: p.pulse_amplitude,
            pulse_frequency: p.pulse_frequency,
            star_aspect_correction: p.aspect_correction,
        }
    }
}

impl AnimationConfig {
    /// Convert to the motion parameters used by the scene
    pub fn to_motion_params(&self) -> MotionParams {
        MotionParams {
            cat_scale: Vec3::from_array(self.cat_scale),
            cat_speed: self.cat_speed,
            cat_amplitude: self.cat_amplitude,
            orbit_radius: self.orbit_radius,
            orbit_speed: self.orbit_speed,
            spin_axis: Vec3::from_array(self.star_spin_axis),
            spin_speed: self.star_spin_speed,
            pulse_base: self.pulse_base,
            pulse_amplitude: self.pulse_amplitude,
            pulse_frequency: self.pulse_frequency,
            aspect_correction: self.star_aspect_correction,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Orthographic view volume [left, right, bottom, top, near, far]
    pub ortho_bounds: [f32; 6],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.1, 0.2, 0.4, 1.0],
            ortho_bounds: [-5.0, 5.0, -3.75, 3.75, -1.0, 1.0],
        }
    }
}

impl RenderingConfig {
    /// Projection matrix for the configured view volume
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        let [l, r, b, t, n, f] = self.ortho_bounds;
        nyan_render::pipeline::orthographic_matrix(l, r, b, t, n, f)
    }

    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let bg = &self.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

/// Sprite image paths
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Cat sprite
    pub cat_sprite: String,
    /// Star sprite
    pub star_sprite: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            cat_sprite: "assets/nyancat.png".to_string(),
            star_sprite: "assets/star.png".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 960);
        assert_eq!(config.window.title, "Nyan Cat!");
        assert_eq!(config.rendering.background_color, [0.1, 0.2, 0.4, 1.0]);
    }

    #[test]
    fn test_animation_defaults_match_motion_params() {
        let config = AppConfig::default();
        assert_eq!(config.animation.to_motion_params(), MotionParams::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("orbit_speed"));
        assert!(toml.contains("star_sprite"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[animation]\norbit_speed = 2.5\n").unwrap();
        assert_eq!(config.animation.orbit_speed, 2.5);
        assert_eq!(config.animation.cat_speed, 6.0);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_load_from_missing_dir_gives_defaults() {
        let config = AppConfig::load_from("no/such/config/dir").unwrap();
        assert_eq!(config.assets.cat_sprite, "assets/nyancat.png");
    }

    #[test]
    fn test_projection_maps_view_volume() {
        let proj = RenderingConfig::default().projection_matrix();
        assert!((proj[0][0] - 0.2).abs() < 1e-6);
        assert!((proj[1][1] - 1.0 / 3.75).abs() < 1e-6);
    }

    #[test]
    fn test_clear_color() {
        let color = RenderingConfig::default().clear_color();
        assert!((color.r - 0.1).abs() < 1e-6);
        assert!((color.b - 0.4).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }
}

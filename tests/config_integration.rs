//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use nyan_scene::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("NYAN_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("NYAN_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("NYAN_ANIMATION__ORBIT_SPEED", "2.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.orbit_speed, 2.5);
    std::env::remove_var("NYAN_ANIMATION__ORBIT_SPEED");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("NYAN_WINDOW__TITLE");

    // cargo runs integration tests from the package root
    let from_file = AppConfig::load_from("config").unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.window.width, builtin.window.width);
    assert_eq!(from_file.window.height, builtin.window.height);
    assert_eq!(
        from_file.animation.to_motion_params(),
        builtin.animation.to_motion_params()
    );
    assert_eq!(from_file.rendering.ortho_bounds, builtin.rendering.ortho_bounds);
    assert_eq!(from_file.assets.cat_sprite, builtin.assets.cat_sprite);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = std::env::temp_dir().join("nyan_scene_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[window]\ntitle = \"Default\"\nwidth = 640\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 640);
    assert_eq!(config.window.height, 960);

    let _ = std::fs::remove_dir_all(&dir);
}

//! Nyan Scene
//!
//! A window showing Nyan Cat bobbing in place while a pulsing star orbits it.
//!
//! The binary wires these modules into a winit event loop; they are exposed
//! as a library so the configuration and input mapping can be tested.

pub mod config;
pub mod input;
pub mod systems;

//! Application systems
//!
//! Window, rendering and simulation pieces of the main loop, kept out of
//! main.rs so each can be tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem, CAT_SLOT, STAR_SLOT};
pub use simulation::{EventResponse, SimulationSystem};
pub use window::{WindowError, WindowSystem};

//! Scene simulation system
//!
//! Feeds wall-clock time into the scene each frame. The scene turns the
//! timestamp into a delta time itself and recomputes both sprite transforms.

use std::time::Instant;
use nyan_core::{FrameTransforms, SpriteScene};
use winit::event::WindowEvent;
use crate::input::{InputAction, InputMapper};

/// What the event loop should do after an event reached the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The scene just terminated; leave the event loop
    Exit,
    /// Input already handled (e.g. a second quit); nothing left to do
    Consumed,
    /// Not an input event; the caller handles it as a window event
    Forward,
}

/// Drives the scene from the system clock
pub struct SimulationSystem {
    start: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system; its clock starts now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the system was created
    pub fn ticks(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Apply an input action to the scene
    pub fn apply_action(scene: &mut SpriteScene, action: InputAction) -> EventResponse {
        match action {
            InputAction::Quit => {
                if scene.request_quit() {
                    EventResponse::Exit
                } else {
                    EventResponse::Consumed
                }
            }
        }
    }

    /// Map a window event to an action and apply it
    pub fn handle_event(scene: &mut SpriteScene, event: &WindowEvent) -> EventResponse {
        match InputMapper::map_window_event(event) {
            Some(action) => Self::apply_action(scene, action),
            None => EventResponse::Forward,
        }
    }

    /// Run one simulation frame
    ///
    /// Returns the new model matrices, or `None` if the scene has terminated
    /// and nothing should be rendered.
    pub fn update(&mut self, scene: &mut SpriteScene) -> Option<FrameTransforms> {
        if !scene.is_running() {
            return None;
        }
        scene.update(self.ticks())
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

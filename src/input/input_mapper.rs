//! Input mapping from raw events to semantic actions
//!
//! The scene takes no gameplay input; the only action is quitting, raised by
//! closing the window or pressing Escape.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Stop the main loop
    Quit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map a window event to an action
    ///
    /// Returns `None` for events that do not concern input (resize, redraw, ...).
    pub fn map_window_event(event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(InputAction::Quit),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key) => Self::map_keyboard(key, event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Map keyboard input to an action
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Quit),
            _ => None,
        }
    }
}

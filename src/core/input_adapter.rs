use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use crate::navigation::{InputSnapshot, ViewerAction};

/// Adapter that bridges Winit events to the Controller trait
/// and collects one `InputSnapshot` per frame
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Current cursor position (relative to window)
    mouse_position: Option<Vec2>,
    /// Cursor movement since last reset
    mouse_delta: Vec2,
    /// Press actions since last reset
    actions: Vec<ViewerAction>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state, event.repeat);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state, false);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused
                self.pressed_keys.clear();
                self.pressed_vec.clear();
            }
            _ => {}
        }
    }

    /// Record a cursor sample; the first one only seeds the position
    pub fn cursor_moved(&mut self, position: Vec2) {
        if let Some(previous) = self.mouse_position {
            self.mouse_delta += position - previous;
        }
        self.mouse_position = Some(position);
    }

    /// Record a button transition
    pub fn set_button(&mut self, button: Button, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
                if !repeat {
                    if let Some(action) = button.press_action() {
                        self.actions.push(action);
                    }
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Input gathered since the last reset
    pub fn snapshot(&self) -> InputSnapshot {
        let mut snapshot = InputSnapshot {
            turn_left: self.is_down(Button::KeyQ),
            turn_right: self.is_down(Button::KeyE),
            pointer_delta: self.mouse_delta,
            actions: self.actions.clone(),
            ..InputSnapshot::default()
        };
        for direction in self.pressed_vec.iter().filter_map(|b| b.move_direction()) {
            snapshot = snapshot.with_held(direction);
        }
        snapshot
    }

    /// Reset per-frame state (mouse delta and actions)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.actions.clear();
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<Vec2> {
        self.mouse_position
    }

    /// Get accumulated mouse delta since last reset
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::KeyI => Some(Button::KeyI),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

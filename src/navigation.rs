use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, MoveDirection};

/// Discrete requests raised by a key or button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    StartPresentation,
    ToggleClap,
    ToggleProp,
    LogPosition,
    Quit,
}

/// Everything the user asked for during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Raw pointer movement in window pixels, y growing downwards
    pub pointer_delta: Vec2,
    /// Presses in arrival order
    pub actions: Vec<ViewerAction>,
}

impl InputSnapshot {
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Backward => self.backward,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
            MoveDirection::Up => self.up,
            MoveDirection::Down => self.down,
        }
    }

    /// Held directions in a fixed order
    pub fn held_directions(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(move |direction| self.is_held(*direction))
    }

    pub fn with_held(mut self, direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Forward => self.forward = true,
            MoveDirection::Backward => self.backward = true,
            MoveDirection::Left => self.left = true,
            MoveDirection::Right => self.right = true,
            MoveDirection::Up => self.up = true,
            MoveDirection::Down => self.down = true,
        }
        self
    }

    pub fn with_pointer_delta(mut self, delta: Vec2) -> Self {
        self.pointer_delta = delta;
        self
    }

    pub fn with_action(mut self, action: ViewerAction) -> Self {
        self.actions.push(action);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// World units per frame for each held direction
    pub speed: f32,
    /// Degrees per pointer pixel
    pub mouse_sensitivity: f32,
    /// Degrees of yaw per frame while a turn key is held
    pub turn_rate: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            mouse_sensitivity: 0.1,
            turn_rate: 1.0,
        }
    }
}

/// User-driven camera control
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Apply one frame of input: rotation first, then one step per held direction
    pub fn apply(&self, input: &InputSnapshot, camera: &mut Camera) {
        let turn = match (input.turn_right, input.turn_left) {
            (true, false) => self.config.turn_rate,
            (false, true) => -self.config.turn_rate,
            _ => 0.0,
        };

        let delta = input.pointer_delta * self.config.mouse_sensitivity;
        if delta != Vec2::ZERO || turn != 0.0 {
            // Window y grows downwards, pitch grows upwards
            camera.rotate(-delta.y, delta.x + turn);
        }

        for direction in input.held_directions() {
            camera.move_by(direction, self.config.speed);
        }
    }
}

use crate::camera::MoveDirection;
use crate::navigation::ViewerAction;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyP,
    KeyI,
    KeyC,
    ArrowUp,
    ArrowDown,
    Space,
    Shift,
    Escape,
    MouseRight,
}

impl Button {
    /// Translation requested while this button is held
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Button::KeyW => Some(MoveDirection::Forward),
            Button::KeyS => Some(MoveDirection::Backward),
            Button::KeyA => Some(MoveDirection::Left),
            Button::KeyD => Some(MoveDirection::Right),
            Button::ArrowUp | Button::Space => Some(MoveDirection::Up),
            Button::ArrowDown | Button::Shift => Some(MoveDirection::Down),
            _ => None,
        }
    }

    /// Action fired once when this button goes down
    pub fn press_action(self) -> Option<ViewerAction> {
        match self {
            Button::KeyC => Some(ViewerAction::StartPresentation),
            Button::KeyP => Some(ViewerAction::ToggleClap),
            Button::KeyI => Some(ViewerAction::ToggleProp),
            Button::MouseRight => Some(ViewerAction::LogPosition),
            Button::Escape => Some(ViewerAction::Quit),
            _ => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

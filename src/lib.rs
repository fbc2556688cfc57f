pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod director;
pub mod headless;
pub mod math;
pub mod navigation;
pub mod types;

pub use animation::{AnimationCoordinator, AnimationState, ClapDirection, RevealMode, SceneTransforms};
pub use camera::{Camera, CameraPose, MoveDirection, MovementBounds};
pub use config::ViewerConfig;
pub use context::{FrameOutput, SceneNavigationContext};
pub use director::{CinematicDirector, CinematicScript, DirectorEvent, Phase};
pub use navigation::{InputSnapshot, NavigationController, ViewerAction};

use glam::Vec3;
use log::{debug, info};

use crate::animation::{AnimationCoordinator, SceneTransforms};
use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::director::{CinematicDirector, Phase};
use crate::navigation::{InputSnapshot, NavigationController, ViewerAction};
use crate::types::{AnimationUniform, CameraUniform};

/// What the renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub camera: CameraUniform,
    pub animation: AnimationUniform,
    pub presenting: bool,
    pub phase: Phase,
    /// Set when a quit action was seen this frame
    pub quit_requested: bool,
}

/// Camera, animation and presentation state for one viewer
///
/// Within a tick either the director or the navigation controller moves the
/// camera, never both.
#[derive(Debug, Clone)]
pub struct SceneNavigationContext {
    pub camera: Camera,
    pub animation: AnimationCoordinator,
    pub director: CinematicDirector,
    pub navigation: NavigationController,
    wheel_pivot: Vec3,
}

impl SceneNavigationContext {
    pub fn new(config: &ViewerConfig) -> Self {
        let camera_config = &config.camera;
        let mut camera = Camera::new(camera_config.position, camera_config.target, camera_config.up);
        camera.set_movement_bounds(camera_config.bounds.min, camera_config.bounds.max);
        camera.set_max_height(camera_config.max_height);

        Self {
            camera,
            animation: AnimationCoordinator::new(config.animation),
            director: CinematicDirector::new(config.presentation.clone()),
            navigation: NavigationController::new(config.navigation),
            wheel_pivot: config.wheel_pivot,
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.director.is_active()
    }

    /// Per-mesh model transforms for the current animation state
    pub fn model_transforms(&self) -> SceneTransforms {
        self.animation.state().model_transforms(self.wheel_pivot)
    }

    /// Run one frame
    pub fn tick(&mut self, input: &InputSnapshot, delta: f32) -> FrameOutput {
        let mut quit_requested = false;
        for action in &input.actions {
            quit_requested |= self.handle_action(*action);
        }

        if self.director.is_active() {
            self.director
                .update(delta, &mut self.camera, &mut self.animation);
        } else {
            self.navigation.apply(input, &mut self.camera);
        }

        self.animation.update();

        FrameOutput {
            camera: self.camera.to_uniform(),
            animation: self.animation.state().to_uniform(),
            presenting: self.director.is_active(),
            phase: self.director.phase(),
            quit_requested,
        }
    }

    /// Returns true for `Quit`
    fn handle_action(&mut self, action: ViewerAction) -> bool {
        match action {
            ViewerAction::StartPresentation => {
                self.director.trigger(&self.camera, &mut self.animation);
            }
            ViewerAction::ToggleClap | ViewerAction::ToggleProp if self.director.is_active() => {
                debug!("{:?} ignored while the presentation runs", action);
            }
            ViewerAction::ToggleClap => self.animation.toggle_clap(),
            ViewerAction::ToggleProp => self.animation.toggle_prop(),
            ViewerAction::LogPosition => {
                let p = self.camera.position();
                info!("Camera X: {:.4} Y: {:.4} Z: {:.4}", p.x, p.y, p.z);
            }
            ViewerAction::Quit => return true,
        }
        false
    }
}

impl Default for SceneNavigationContext {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

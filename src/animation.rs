use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{lerp, progress};
use crate::types::AnimationUniform;

/// Which way the hands are travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClapDirection {
    /// Offset growing towards `clap_max`
    Inward,
    /// Offset shrinking towards zero
    Outward,
}

impl ClapDirection {
    pub fn sign(self) -> f32 {
        match self {
            ClapDirection::Inward => 1.0,
            ClapDirection::Outward => -1.0,
        }
    }
}

/// How the prop appears when the presentation reveals it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RevealMode {
    /// Scale jumps to 1 when the reveal begins
    Instant,
    /// Scale ramps linearly 0 -> 1 over `duration` seconds,
    /// or over the whole reveal phase when unset
    Ramped {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<f32>,
    },
}

impl RevealMode {
    /// Ramp spanning the reveal phase
    pub fn ramped() -> Self {
        RevealMode::Ramped { duration: None }
    }

    /// Prop scale after `elapsed` seconds of a reveal phase lasting `phase_duration`
    pub fn scale_at(self, elapsed: f32, phase_duration: f32) -> f32 {
        match self {
            RevealMode::Instant => 1.0,
            RevealMode::Ramped { duration } => {
                lerp(0.0, 1.0, progress(elapsed, duration.unwrap_or(phase_duration)))
            }
        }
    }
}

impl Default for RevealMode {
    fn default() -> Self {
        RevealMode::ramped()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Offset added per frame while clapping
    pub clap_speed: f32,
    pub clap_max: f32,
    /// Degrees per frame
    pub wheel_speed: f32,
    pub initial_prop_scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            clap_speed: 0.015,
            clap_max: 0.35,
            wheel_speed: 0.5,
            initial_prop_scale: 1.0,
        }
    }
}

/// Model transforms for the animated meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransforms {
    pub left_hand: Mat4,
    pub right_hand: Mat4,
    pub prop: Mat4,
    pub wheel: Mat4,
}

/// Frame-driven animation values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub clap_active: bool,
    pub clap_offset: f32,
    pub clap_direction: ClapDirection,
    /// Uniform scale of the revealed prop, in [0, 1]
    pub prop_scale: f32,
    /// Ferris wheel rotation in degrees, in [0, 360)
    pub wheel_angle: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            clap_active: false,
            clap_offset: 0.0,
            clap_direction: ClapDirection::Inward,
            prop_scale: 0.0,
            wheel_angle: 0.0,
        }
    }
}

impl AnimationState {
    pub fn left_hand_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.clap_offset, 0.0, 0.0))
    }

    pub fn right_hand_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.clap_offset, 0.0, 0.0))
    }

    pub fn prop_transform(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.prop_scale))
    }

    /// Wheel spin about the X axis through `pivot`
    pub fn wheel_transform(&self, pivot: Vec3) -> Mat4 {
        Mat4::from_translation(pivot)
            * Mat4::from_rotation_x(self.wheel_angle.to_radians())
            * Mat4::from_translation(-pivot)
    }

    pub fn model_transforms(&self, wheel_pivot: Vec3) -> SceneTransforms {
        SceneTransforms {
            left_hand: self.left_hand_transform(),
            right_hand: self.right_hand_transform(),
            prop: self.prop_transform(),
            wheel: self.wheel_transform(wheel_pivot),
        }
    }

    pub fn to_uniform(&self) -> AnimationUniform {
        AnimationUniform {
            clap_offset: self.clap_offset,
            prop_scale: self.prop_scale,
            wheel_angle: self.wheel_angle,
            _pad: 0.0,
        }
    }
}

/// Owns the scene animation state and advances it once per frame
#[derive(Debug, Clone)]
pub struct AnimationCoordinator {
    config: AnimationConfig,
    state: AnimationState,
}

impl AnimationCoordinator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            state: AnimationState {
                prop_scale: config.initial_prop_scale.clamp(0.0, 1.0),
                ..AnimationState::default()
            },
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn clap_active(&self) -> bool {
        self.state.clap_active
    }

    pub fn clap_offset(&self) -> f32 {
        self.state.clap_offset
    }

    pub fn clap_direction(&self) -> ClapDirection {
        self.state.clap_direction
    }

    pub fn prop_scale(&self) -> f32 {
        self.state.prop_scale
    }

    pub fn wheel_angle(&self) -> f32 {
        self.state.wheel_angle
    }

    /// Advance one frame
    pub fn update(&mut self) {
        let state = &mut self.state;

        if state.clap_active {
            state.clap_offset += self.config.clap_speed * state.clap_direction.sign();
            if state.clap_offset >= self.config.clap_max {
                state.clap_offset = self.config.clap_max;
                state.clap_direction = ClapDirection::Outward;
            } else if state.clap_offset <= 0.0 {
                state.clap_offset = 0.0;
                state.clap_direction = ClapDirection::Inward;
            }
        } else {
            state.clap_offset = 0.0;
            state.clap_direction = ClapDirection::Inward;
        }

        state.wheel_angle = (state.wheel_angle + self.config.wheel_speed).rem_euclid(360.0);
    }

    /// Rest values are applied by the next `update`
    pub fn set_clap_active(&mut self, active: bool) {
        self.state.clap_active = active;
    }

    /// Flip clapping; stopping resets the hands immediately
    pub fn toggle_clap(&mut self) {
        self.state.clap_active = !self.state.clap_active;
        if !self.state.clap_active {
            self.state.clap_offset = 0.0;
            self.state.clap_direction = ClapDirection::Inward;
        }
    }

    /// Clamped into [0, 1]; non-finite values are ignored
    pub fn set_prop_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.state.prop_scale = scale.clamp(0.0, 1.0);
        }
    }

    /// Instant show/hide
    pub fn toggle_prop(&mut self) {
        self.state.prop_scale = if self.state.prop_scale > 0.0 { 0.0 } else { 1.0 };
    }
}

impl Default for AnimationCoordinator {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

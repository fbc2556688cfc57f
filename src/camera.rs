use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::AABB;
use crate::types::CameraUniform;

/// Pitch limit in degrees, keeps the view away from the poles
pub const PITCH_LIMIT: f32 = 89.0;

/// Direction of a single translation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];
}

/// Region the camera may translate into through `Camera::move_by`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementBounds {
    pub region: AABB,
    /// Ceiling applied to upward steps before the box clamp
    pub max_height: f32,
}

impl MovementBounds {
    pub fn unbounded() -> Self {
        Self {
            region: AABB::unbounded(),
            max_height: f32::INFINITY,
        }
    }
}

impl Default for MovementBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Position plus look target, enough to restore a view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// First-person camera with a bounded movement region
///
/// `front` always points from `position` towards `target`; `right` is
/// `normalize(front x up)`. Only `move_by` applies the movement bounds,
/// direct overrides through `set_position`, `set_target` and `set_pose`
/// are taken as given.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    front: Vec3,
    right: Vec3,
    /// Degrees
    yaw: f32,
    /// Degrees, within [-PITCH_LIMIT, PITCH_LIMIT]
    pitch: f32,
    bounds: MovementBounds,
}

impl Camera {
    /// Create a camera looking from `position` at `target`
    /// `up` is fixed for the lifetime of the camera
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let up = up.try_normalize().unwrap_or(Vec3::Y);
        let mut camera = Self {
            position,
            target,
            up,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            yaw: -90.0,
            pitch: 0.0,
            bounds: MovementBounds::unbounded(),
        };
        camera.derive_orientation();
        camera
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn bounds(&self) -> &MovementBounds {
        &self.bounds
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
        }
    }

    /// Translate one step of `speed` units, then clamp into the movement box
    /// Non-finite speeds are ignored
    pub fn move_by(&mut self, direction: MoveDirection, speed: f32) {
        if !speed.is_finite() {
            return;
        }

        let delta = match direction {
            MoveDirection::Forward => self.front * speed,
            MoveDirection::Backward => -self.front * speed,
            MoveDirection::Right => self.right * speed,
            MoveDirection::Left => -self.right * speed,
            MoveDirection::Up => {
                // The ceiling shortens the step itself, not just the final position
                let mut candidate = self.position + self.up * speed;
                candidate.y = candidate.y.min(self.bounds.max_height);
                candidate - self.position
            }
            MoveDirection::Down => -self.up * speed,
        };

        self.position += delta;
        self.target += delta;

        self.position = self.bounds.region.clamp_point(self.position);
        self.target = self.position + self.front;
    }

    /// Accumulate pitch/yaw (degrees) and rebuild the basis from the angles
    /// Non-finite deltas are ignored
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        if !delta_pitch.is_finite() || !delta_yaw.is_finite() {
            return;
        }

        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw += delta_yaw;

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        self.front = front.normalize();
        if let Some(right) = self.front.cross(self.up).try_normalize() {
            self.right = right;
        }
        self.target = self.position + self.front;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.derive_orientation();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.derive_orientation();
    }

    /// Set position and target together, deriving orientation once
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.target = pose.target;
        self.derive_orientation();
    }

    pub fn set_movement_bounds(&mut self, min: Vec3, max: Vec3) {
        self.bounds.region = AABB::new(min, max);
    }

    pub fn set_max_height(&mut self, max_height: f32) {
        self.bounds.max_height = max_height;
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.front.to_array(),
            _pad2: 0.0,
        }
    }

    /// Rebuild front/right/yaw/pitch from position and target
    /// A degenerate gaze keeps the previous basis
    fn derive_orientation(&mut self) {
        let Some(front) = (self.target - self.position).try_normalize() else {
            return;
        };
        self.front = front;
        if let Some(right) = front.cross(self.up).try_normalize() {
            self.right = right;
        }
        self.yaw = front.z.atan2(front.x).to_degrees();
        self.pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn fairground_camera() -> Camera {
        let mut camera = Camera::new(Vec3::new(0.0, 3.0, 20.0), Vec3::ZERO, Vec3::Y);
        camera.set_max_height(18.518449);
        camera.set_movement_bounds(
            Vec3::new(-16.6564, 1.5543, -20.506),
            Vec3::new(27.2437, 18.518449, 19.3505),
        );
        camera
    }

    #[test]
    fn new_derives_front_from_target() {
        let camera = Camera::new(Vec3::new(0.0, 3.0, 20.0), Vec3::ZERO, Vec3::Y);
        let expected = Vec3::new(0.0, -3.0, -20.0).normalize();
        assert!(camera.front().abs_diff_eq(expected, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!((camera.yaw() - (-90.0)).abs() < 1e-3);
        assert!((camera.pitch() - (-3.0f32 / 409.0f32.sqrt()).asin().to_degrees()).abs() < 1e-3);
    }

    #[test]
    fn new_keeps_original_target() {
        let camera = Camera::new(Vec3::new(0.0, 3.0, 20.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn forward_preserves_gaze() {
        let mut camera = fairground_camera();
        let front = camera.front();
        camera.move_by(MoveDirection::Forward, 0.5);
        assert!(camera.front().abs_diff_eq(front, EPS));
        assert!((camera.target() - camera.position()).abs_diff_eq(front, EPS));
    }

    #[test]
    fn up_step_is_shortened_by_ceiling() {
        let mut camera = fairground_camera();
        camera.set_position(Vec3::new(0.0, 18.45, 0.0));
        camera.set_target(Vec3::new(0.0, 18.45, -1.0));
        camera.move_by(MoveDirection::Up, 0.1);
        assert!((camera.position().y - 18.518449).abs() < EPS);
    }

    #[test]
    fn down_step_is_clamped_by_floor_only() {
        let mut camera = fairground_camera();
        camera.set_pose(CameraPose {
            position: Vec3::new(0.0, 1.6, 0.0),
            target: Vec3::new(0.0, 1.6, -1.0),
        });
        camera.move_by(MoveDirection::Down, 1.0);
        assert!((camera.position().y - 1.5543).abs() < EPS);
    }

    #[test]
    fn rotate_clamps_pitch() {
        let mut camera = fairground_camera();
        camera.rotate(500.0, 0.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.rotate(-1000.0, 0.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn rotate_ignores_nan() {
        let mut camera = fairground_camera();
        let before = camera.pose();
        camera.rotate(f32::NAN, 10.0);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn move_ignores_infinite_speed() {
        let mut camera = fairground_camera();
        let before = camera.pose();
        camera.move_by(MoveDirection::Forward, f32::INFINITY);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn degenerate_target_keeps_basis() {
        let mut camera = fairground_camera();
        let front = camera.front();
        camera.set_target(camera.position());
        assert_eq!(camera.front(), front);
        assert!(camera.front().is_finite());
    }

    #[test]
    fn direct_override_is_not_clamped() {
        let mut camera = fairground_camera();
        camera.set_position(Vec3::new(100.0, 60.0, -90.0));
        assert_eq!(camera.position(), Vec3::new(100.0, 60.0, -90.0));
    }

    #[test]
    fn uniform_carries_view_matrix() {
        let camera = fairground_camera();
        let uniform = camera.to_uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.position, [0.0, 3.0, 20.0]);
    }
}

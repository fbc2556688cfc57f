use glam::Vec3;
use scene_navigator::camera::PITCH_LIMIT;
use scene_navigator::{Camera, CameraPose, MoveDirection};

fn park_camera() -> Camera {
    let mut camera = Camera::new(Vec3::new(0.0, 3.0, 20.0), Vec3::ZERO, Vec3::Y);
    camera.set_movement_bounds(
        Vec3::new(-16.6564, 1.5543, -20.506),
        Vec3::new(27.2437, 18.518449, 19.3505),
    );
    camera.set_max_height(18.518449);
    camera
}

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_initial_front_points_at_target() {
        let camera = park_camera();
        let expected = Vec3::new(0.0, -3.0, -20.0).normalize();
        assert!(camera.front().abs_diff_eq(expected, 1e-5));
        assert!((camera.front().length() - 1.0).abs() < 1e-5);
        assert!(camera.right().dot(camera.front()).abs() < 1e-5);
    }

    #[test]
    fn test_initial_angles_match_gaze() {
        let camera = park_camera();
        let front = Vec3::new(0.0, -3.0, -20.0).normalize();
        assert!((camera.pitch() - front.y.asin().to_degrees()).abs() < 1e-3);
        assert!((camera.yaw() - front.z.atan2(front.x).to_degrees()).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_keeps_pitch_in_range() {
        let mut camera = park_camera();
        for step in 0..200 {
            let sign = if step < 100 { 1.0 } else { -1.0 };
            camera.rotate(sign * 7.5, 3.0);
            assert!(camera.pitch() <= PITCH_LIMIT && camera.pitch() >= -PITCH_LIMIT);
            assert!((camera.front().length() - 1.0).abs() < 1e-5);
            assert!(camera.target().abs_diff_eq(camera.position() + camera.front(), 1e-5));
        }
    }

    #[test]
    fn test_rotation_ignores_non_finite_input() {
        let mut camera = park_camera();
        let before = camera.pose();
        camera.rotate(f32::NAN, 10.0);
        camera.rotate(0.0, f32::INFINITY);
        assert_eq!(camera.pose(), before);
    }

    #[test]
    fn test_movement_stays_in_bounds() {
        let mut camera = park_camera();
        let region = camera.bounds().region;

        for direction in MoveDirection::ALL {
            for _ in 0..500 {
                camera.move_by(direction, 0.5);
                assert!(region.contains(camera.position()), "{:?} escaped to {:?}", direction, camera.position());
                assert!(camera.position().y <= 18.518449 + 1e-4);
                assert!((camera.target() - camera.position()).abs_diff_eq(camera.front(), 1e-5));
            }
        }
    }

    #[test]
    fn test_up_step_is_capped_by_ceiling() {
        let mut camera = park_camera();
        camera.set_position(Vec3::new(0.0, 18.4, 0.0));
        camera.set_target(Vec3::new(0.0, 18.4, -1.0));
        camera.move_by(MoveDirection::Up, 1.0);
        assert!((camera.position().y - 18.518449).abs() < 1e-4);
    }

    #[test]
    fn test_forward_step_moves_along_front() {
        let mut camera = park_camera();
        camera.set_pose(CameraPose {
            position: Vec3::new(0.0, 3.0, 15.0),
            target: Vec3::new(0.0, 0.0, -5.0),
        });
        let start = camera.position();
        let front = camera.front();
        camera.move_by(MoveDirection::Forward, 0.1);
        assert!(camera.position().abs_diff_eq(start + front * 0.1, 1e-5));
    }

    #[test]
    fn test_start_outside_box_snaps_in_on_first_move() {
        // The default start z = 20 lies past the box's far face at 19.3505
        let mut camera = park_camera();
        assert!(!camera.bounds().region.contains(camera.position()));
        let front = camera.front();

        camera.move_by(MoveDirection::Forward, 0.1);
        assert!(camera.bounds().region.contains(camera.position()));
        assert_eq!(camera.position().z, 19.3505);
        assert!((camera.position().y - (3.0 + front.y * 0.1)).abs() < 1e-5);
        assert!(camera.target().abs_diff_eq(camera.position() + front, 1e-5));
    }

    #[test]
    fn test_direct_overrides_are_not_clamped() {
        let mut camera = park_camera();
        let outside = Vec3::new(100.0, 50.0, -100.0);
        camera.set_position(outside);
        assert_eq!(camera.position(), outside);

        camera.set_pose(CameraPose {
            position: Vec3::new(0.0, 40.0, 0.0),
            target: Vec3::new(0.0, 0.0, -1.0),
        });
        assert_eq!(camera.position(), Vec3::new(0.0, 40.0, 0.0));
        assert!((camera.front().length() - 1.0).abs() < 1e-5);
        assert!(camera.pitch() <= PITCH_LIMIT && camera.pitch() >= -PITCH_LIMIT);
    }

    #[test]
    fn test_degenerate_gaze_keeps_basis() {
        let mut camera = park_camera();
        let front = camera.front();
        camera.set_target(camera.position());
        assert_eq!(camera.front(), front);
    }

    #[test]
    fn test_view_matrix_maps_target_ahead() {
        let camera = park_camera();
        let view_space = camera.view_matrix().transform_point3(camera.target());
        // Right-handed view space looks down -Z
        assert!(view_space.z < 0.0);
        assert!(view_space.x.abs() < 1e-4 && view_space.y.abs() < 1e-4);
    }
}

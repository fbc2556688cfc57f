use glam::{Vec2, Vec3};
use scene_navigator::core::{Button, WinitController};
use scene_navigator::navigation::NavigationConfig;
use scene_navigator::{
    CameraPose, InputSnapshot, MoveDirection, NavigationController, Phase, SceneNavigationContext, ViewerAction,
    ViewerConfig,
};
use winit::event::ElementState;

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_held_keys_fly_the_camera() {
        let mut ctx = SceneNavigationContext::default();
        ctx.camera.set_pose(CameraPose {
            position: Vec3::new(0.0, 3.0, 15.0),
            target: Vec3::new(0.0, 0.0, -5.0),
        });
        let start = ctx.camera.position();
        let front = ctx.camera.front();

        let mut input = WinitController::new();
        input.set_button(Button::KeyW, ElementState::Pressed, false);
        for _ in 0..10 {
            ctx.tick(&input.snapshot(), 1.0 / 60.0);
            input.reset_deltas();
        }

        assert!(ctx.camera.position().abs_diff_eq(start + front, 1e-4));
    }

    #[test]
    fn test_first_move_pulls_default_start_into_the_park() {
        let mut ctx = SceneNavigationContext::default();
        let region = ctx.camera.bounds().region;
        assert!(!region.contains(ctx.camera.position()));

        ctx.tick(&InputSnapshot::default().with_held(MoveDirection::Forward), 1.0 / 60.0);
        assert!(region.contains(ctx.camera.position()));
        assert_eq!(ctx.camera.position().z, 19.3505);
    }

    #[test]
    fn test_camera_never_leaves_the_park() {
        let mut ctx = SceneNavigationContext::default();
        let region = ctx.camera.bounds().region;

        let sweeps = [
            InputSnapshot::default().with_held(MoveDirection::Forward),
            InputSnapshot::default().with_held(MoveDirection::Up).with_held(MoveDirection::Left),
            InputSnapshot::default()
                .with_held(MoveDirection::Backward)
                .with_pointer_delta(Vec2::new(40.0, 0.0)),
            InputSnapshot::default().with_held(MoveDirection::Down).with_held(MoveDirection::Right),
        ];
        for input in &sweeps {
            for _ in 0..600 {
                ctx.tick(input, 1.0 / 60.0);
                assert!(region.contains(ctx.camera.position()));
                assert!(ctx.camera.position().y <= 18.518449 + 1e-4);
            }
        }
    }

    #[test]
    fn test_turn_keys_yaw_the_view() {
        let nav = NavigationController::new(NavigationConfig {
            turn_rate: 2.0,
            ..NavigationConfig::default()
        });
        let mut ctx = SceneNavigationContext::default();
        let yaw = ctx.camera.yaw();
        let input = InputSnapshot {
            turn_right: true,
            ..InputSnapshot::default()
        };
        nav.apply(&input, &mut ctx.camera);
        assert!((ctx.camera.yaw() - (yaw + 2.0)).abs() < 1e-3);
        assert_eq!(ctx.camera.position(), Vec3::new(0.0, 3.0, 20.0));
    }

    #[test]
    fn test_pointer_right_turns_right() {
        let nav = NavigationController::default();
        let mut ctx = SceneNavigationContext::default();
        let right = ctx.camera.right();
        nav.apply(
            &InputSnapshot::default().with_pointer_delta(Vec2::new(30.0, 0.0)),
            &mut ctx.camera,
        );
        assert!(ctx.camera.front().dot(right) > 0.0);
    }

    #[test]
    fn test_presentation_key_hands_control_back() {
        let mut ctx = SceneNavigationContext::new(&ViewerConfig::default().with_reveal(true));
        let start = ctx.camera.pose();

        let mut input = WinitController::new();
        input.set_button(Button::KeyC, ElementState::Pressed, false);
        let out = ctx.tick(&input.snapshot(), 1.0 / 60.0);
        input.reset_deltas();
        assert!(out.presenting);
        assert_eq!(out.phase, Phase::Descend);

        // Holding keys during the run does not move the scripted camera off its path
        input.set_button(Button::KeyW, ElementState::Pressed, false);
        let mut frames = 0;
        while ctx.is_presenting() && frames < 10_000 {
            ctx.tick(&input.snapshot(), 1.0 / 60.0);
            input.reset_deltas();
            frames += 1;
        }
        assert!(!ctx.is_presenting());
        assert_eq!(ctx.camera.pose(), start);

        // Next frame the held key moves the camera again
        ctx.tick(&input.snapshot(), 1.0 / 60.0);
        assert!(ctx.camera.position() != start.position);
    }

    #[test]
    fn test_toggles_drive_animation_uniform() {
        let mut ctx = SceneNavigationContext::default();
        let out = ctx.tick(&InputSnapshot::default().with_action(ViewerAction::ToggleProp), 1.0 / 60.0);
        assert_eq!(out.animation.prop_scale, 0.0);

        let out = ctx.tick(&InputSnapshot::default().with_action(ViewerAction::ToggleProp), 1.0 / 60.0);
        assert_eq!(out.animation.prop_scale, 1.0);
        assert!((out.animation.wheel_angle - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut ctx = SceneNavigationContext::default();
        let mut input = WinitController::new();
        input.set_button(Button::Escape, ElementState::Pressed, false);
        assert!(ctx.tick(&input.snapshot(), 1.0 / 60.0).quit_requested);
    }
}

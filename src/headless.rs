use log::info;

use crate::camera::CameraPose;
use crate::context::SceneNavigationContext;
use crate::director::Phase;
use crate::navigation::{InputSnapshot, ViewerAction};

/// Result of replaying the presentation without a window
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub frames: u64,
    pub simulated_seconds: f32,
    /// Every phase entered, in order, starting with the first scripted one
    pub phases: Vec<Phase>,
    pub start_pose: CameraPose,
    pub final_pose: CameraPose,
    /// False when the frame cap was hit first
    pub completed: bool,
}

/// Trigger the presentation and step it at `hz` until it hands control back
pub fn replay_presentation(ctx: &mut SceneNavigationContext, hz: f32, max_frames: u64) -> ReplaySummary {
    let step = 1.0 / hz;
    let start_pose = ctx.camera.pose();
    let mut phases = Vec::new();
    let mut last_phase = Phase::Idle;
    let mut frames = 0;

    let trigger = InputSnapshot::default().with_action(ViewerAction::StartPresentation);
    let idle = InputSnapshot::default();

    while frames < max_frames {
        let input = if frames == 0 { &trigger } else { &idle };
        let output = ctx.tick(input, step);
        frames += 1;

        if output.phase != last_phase {
            let p = ctx.camera.position();
            info!(
                "frame {:>5} t={:>6.2}s {:<12} camera ({:.2}, {:.2}, {:.2})",
                frames,
                frames as f32 * step,
                output.phase.name(),
                p.x,
                p.y,
                p.z
            );
            phases.push(output.phase);
            last_phase = output.phase;
        }

        if !output.presenting {
            break;
        }
    }

    ReplaySummary {
        frames,
        simulated_seconds: frames as f32 * step,
        phases,
        start_pose,
        final_pose: ctx.camera.pose(),
        completed: !ctx.is_presenting(),
    }
}

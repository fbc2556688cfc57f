use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationCoordinator, RevealMode};
use crate::camera::{Camera, CameraPose};
use crate::math::{lerp_vec3, progress, AABB};

/// Stage of the scripted presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Fly from the top vantage down to the prop
    Descend,
    /// Hold on the prop while it appears and the hands start clapping
    Reveal,
    /// Move over to the clapping hands
    HandsFocus,
    /// Visit the explore target at this index
    Explore(usize),
    /// Fly back to the pose saved at trigger time
    Return,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Descend => "descend",
            Phase::Reveal => "reveal",
            Phase::HandsFocus => "hands focus",
            Phase::Explore(_) => "explore",
            Phase::Return => "return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorEvent {
    /// Request to start the presentation
    Trigger,
    /// Time has advanced within the current phase
    Tick,
}

/// Next phase for `event`, given the time spent in `phase`
///
/// Triggers only start the sequence from `Idle`. A tick moves on once
/// `elapsed` reaches the phase duration, one phase at a time.
pub fn transition(phase: Phase, elapsed: f32, event: DirectorEvent, script: &CinematicScript) -> Phase {
    match (phase, event) {
        (Phase::Idle, DirectorEvent::Trigger) => Phase::Descend,
        (_, DirectorEvent::Trigger) | (Phase::Idle, DirectorEvent::Tick) => phase,
        (_, DirectorEvent::Tick) if elapsed < script.duration(phase) => phase,
        (Phase::Descend, DirectorEvent::Tick) => Phase::Reveal,
        (Phase::Reveal, DirectorEvent::Tick) => Phase::HandsFocus,
        (Phase::HandsFocus, DirectorEvent::Tick) => script.explore_or_return(0),
        (Phase::Explore(index), DirectorEvent::Tick) => script.explore_or_return(index + 1),
        (Phase::Return, DirectorEvent::Tick) => Phase::Idle,
    }
}

/// Seconds spent in each phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseDurations {
    pub descend: f32,
    pub reveal: f32,
    pub hands_focus: f32,
    /// Per explore target
    pub explore: f32,
    #[serde(rename = "return")]
    pub return_home: f32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            descend: 4.0,
            reveal: 1.5,
            hands_focus: 0.8,
            explore: 3.0,
            return_home: 3.0,
        }
    }
}

/// A point of interest visited during the explore phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreTarget {
    pub name: String,
    pub bounds: AABB,
    /// Camera placement relative to the bounds center
    pub offset: Vec3,
}

impl ExploreTarget {
    pub fn focus(&self) -> Vec3 {
        self.bounds.center()
    }

    pub fn vantage(&self) -> Vec3 {
        self.focus() + self.offset
    }
}

/// Everything the director needs to know about the scene and the timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinematicScript {
    pub durations: PhaseDurations,
    pub reveal_mode: RevealMode,
    pub prop_bounds: AABB,
    /// Descent start, relative to the prop center
    pub top_offset: Vec3,
    /// Descent end and reveal vantage, relative to the prop center
    pub near_offset: Vec3,
    pub left_hand_bounds: AABB,
    pub right_hand_bounds: AABB,
    /// Camera placement relative to the midpoint between the hands
    pub hands_offset: Vec3,
    pub explore: Vec<ExploreTarget>,
}

impl CinematicScript {
    pub fn prop_focus(&self) -> Vec3 {
        self.prop_bounds.center()
    }

    pub fn top_vantage(&self) -> Vec3 {
        self.prop_focus() + self.top_offset
    }

    pub fn near_vantage(&self) -> Vec3 {
        self.prop_focus() + self.near_offset
    }

    /// Midpoint between the two hands
    pub fn hands_focus(&self) -> Vec3 {
        (self.left_hand_bounds.center() + self.right_hand_bounds.center()) * 0.5
    }

    pub fn hands_vantage(&self) -> Vec3 {
        self.hands_focus() + self.hands_offset
    }

    pub fn duration(&self, phase: Phase) -> f32 {
        match phase {
            Phase::Idle => 0.0,
            Phase::Descend => self.durations.descend,
            Phase::Reveal => self.durations.reveal,
            Phase::HandsFocus => self.durations.hands_focus,
            Phase::Explore(_) => self.durations.explore,
            Phase::Return => self.durations.return_home,
        }
    }

    /// Sum of every phase duration for one full run
    pub fn total_duration(&self) -> f32 {
        let d = &self.durations;
        d.descend + d.reveal + d.hands_focus + d.explore * self.explore.len() as f32 + d.return_home
    }

    fn explore_or_return(&self, index: usize) -> Phase {
        if index < self.explore.len() {
            Phase::Explore(index)
        } else {
            Phase::Return
        }
    }
}

impl Default for CinematicScript {
    fn default() -> Self {
        Self {
            durations: PhaseDurations::default(),
            reveal_mode: RevealMode::ramped(),
            prop_bounds: AABB::new(Vec3::new(3.6, 1.6, -4.1), Vec3::new(4.8, 2.9, -2.9)),
            top_offset: Vec3::new(0.0, 12.0, 10.0),
            near_offset: Vec3::new(0.0, 1.2, 4.0),
            left_hand_bounds: AABB::new(Vec3::new(-1.9, 2.1, 5.9), Vec3::new(-0.6, 3.1, 6.9)),
            right_hand_bounds: AABB::new(Vec3::new(0.6, 2.1, 5.9), Vec3::new(1.9, 3.1, 6.9)),
            hands_offset: Vec3::new(0.0, 0.8, 3.5),
            explore: vec![
                ExploreTarget {
                    name: "ferris wheel".to_string(),
                    bounds: AABB::new(Vec3::new(14.0, 1.6, -14.0), Vec3::new(22.0, 15.0, -10.0)),
                    offset: Vec3::new(-10.0, 1.0, 16.0),
                },
                ExploreTarget {
                    name: "swing".to_string(),
                    bounds: AABB::new(Vec3::new(-11.0, 1.6, 6.5), Vec3::new(-8.0, 4.0, 9.5)),
                    offset: Vec3::new(5.0, 2.0, 6.0),
                },
                ExploreTarget {
                    name: "ice cream".to_string(),
                    bounds: AABB::new(Vec3::new(9.5, 1.6, 10.0), Vec3::new(10.5, 2.8, 11.0)),
                    offset: Vec3::new(-3.0, 1.5, 4.0),
                },
                ExploreTarget {
                    name: "hat".to_string(),
                    bounds: AABB::new(Vec3::new(-4.6, 2.5, -10.6), Vec3::new(-3.4, 3.5, -9.4)),
                    offset: Vec3::new(3.0, 1.5, 5.0),
                },
            ],
        }
    }
}

/// Scripted camera presentation
///
/// While a sequence runs the director is the only writer of the camera pose
/// and it overrides the clap/prop animation flags. Callers advance it with
/// the frame delta; there is no wall-clock dependency.
#[derive(Debug, Clone)]
pub struct CinematicDirector {
    script: CinematicScript,
    phase: Phase,
    elapsed_in_phase: f32,
    saved_pose: Option<CameraPose>,
    phase_start_position: Vec3,
    phase_start_target: Vec3,
}

impl CinematicDirector {
    pub fn new(script: CinematicScript) -> Self {
        Self {
            script,
            phase: Phase::Idle,
            elapsed_in_phase: 0.0,
            saved_pose: None,
            phase_start_position: Vec3::ZERO,
            phase_start_target: Vec3::ZERO,
        }
    }

    pub fn script(&self) -> &CinematicScript {
        &self.script
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn elapsed_in_phase(&self) -> f32 {
        self.elapsed_in_phase
    }

    pub fn explore_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Explore(index) => Some(index),
            _ => None,
        }
    }

    pub fn saved_pose(&self) -> Option<CameraPose> {
        self.saved_pose
    }

    pub fn phase_start_position(&self) -> Vec3 {
        self.phase_start_position
    }

    /// Start the sequence; ignored unless idle
    pub fn trigger(&mut self, camera: &Camera, animation: &mut AnimationCoordinator) -> bool {
        let next = transition(self.phase, self.elapsed_in_phase, DirectorEvent::Trigger, &self.script);
        if next == self.phase {
            debug!("Presentation already running ({}), trigger ignored", self.phase.name());
            return false;
        }

        self.saved_pose = Some(camera.pose());
        self.elapsed_in_phase = 0.0;
        self.phase = next;
        self.phase_start_position = camera.position();
        self.phase_start_target = camera.target();
        animation.set_prop_scale(0.0);

        info!(
            "Presentation started from ({:.2}, {:.2}, {:.2}), {:.1}s scripted",
            camera.position().x,
            camera.position().y,
            camera.position().z,
            self.script.total_duration()
        );
        true
    }

    /// Abort a running sequence and put the camera back where it was
    pub fn cancel(&mut self, camera: &mut Camera, animation: &mut AnimationCoordinator) {
        if !self.is_active() {
            return;
        }
        info!("Presentation cancelled during {}", self.phase.name());
        self.finish(camera, animation);
    }

    /// Advance by `delta` seconds, driving the camera and animation flags
    /// Returns the new phase when a transition happened
    ///
    /// Non-finite or negative deltas count as zero.
    pub fn update(
        &mut self,
        delta: f32,
        camera: &mut Camera,
        animation: &mut AnimationCoordinator,
    ) -> Option<Phase> {
        if self.phase == Phase::Idle {
            return None;
        }

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed_in_phase += delta;

        let t = progress(self.elapsed_in_phase, self.script.duration(self.phase));
        if let Some(pose) = self.planned_pose(t) {
            camera.set_pose(pose);
        }
        match self.phase {
            Phase::Reveal => {
                animation.set_clap_active(true);
                let scale = self
                    .script
                    .reveal_mode
                    .scale_at(self.elapsed_in_phase, self.script.durations.reveal);
                animation.set_prop_scale(scale);
            }
            Phase::HandsFocus => animation.set_clap_active(true),
            _ => {}
        }

        let next = transition(self.phase, self.elapsed_in_phase, DirectorEvent::Tick, &self.script);
        if next == self.phase {
            return None;
        }
        self.enter(next, camera, animation);
        Some(next)
    }

    /// Camera pose of the current phase at progress `t`, before it is applied
    pub fn planned_pose(&self, t: f32) -> Option<CameraPose> {
        let t = t.clamp(0.0, 1.0);
        let script = &self.script;
        let pose = match self.phase {
            Phase::Idle => return None,
            Phase::Descend => CameraPose {
                position: lerp_vec3(script.top_vantage(), script.near_vantage(), t),
                target: script.prop_focus(),
            },
            Phase::Reveal => CameraPose {
                position: script.near_vantage(),
                target: script.prop_focus(),
            },
            Phase::HandsFocus => CameraPose {
                position: lerp_vec3(self.phase_start_position, script.hands_vantage(), t),
                target: script.hands_focus(),
            },
            Phase::Explore(index) => {
                let explore = script.explore.get(index)?;
                CameraPose {
                    position: lerp_vec3(self.phase_start_position, explore.vantage(), t),
                    target: explore.focus(),
                }
            }
            Phase::Return => {
                let saved = self.saved_pose?;
                CameraPose {
                    position: lerp_vec3(self.phase_start_position, saved.position, t),
                    target: lerp_vec3(self.phase_start_target, saved.target, t),
                }
            }
        };
        Some(pose)
    }

    fn enter(&mut self, next: Phase, camera: &mut Camera, animation: &mut AnimationCoordinator) {
        let previous = self.phase;
        debug!(
            "Presentation {} -> {} after {:.2}s",
            previous.name(),
            next.name(),
            self.elapsed_in_phase
        );

        if next == Phase::Idle {
            self.finish(camera, animation);
            info!("Presentation finished, control returned");
            return;
        }

        self.phase = next;
        self.elapsed_in_phase = 0.0;
        self.phase_start_position = camera.position();
        self.phase_start_target = camera.target();

        // The prop is fully shown once the reveal is over, whatever the ramp length
        if previous == Phase::Reveal {
            animation.set_prop_scale(1.0);
        }
        if previous == Phase::HandsFocus {
            animation.set_clap_active(false);
            animation.set_prop_scale(0.0);
        }

        match next {
            Phase::Reveal => {
                animation.set_clap_active(true);
                let scale = self.script.reveal_mode.scale_at(0.0, self.script.durations.reveal);
                animation.set_prop_scale(scale);
            }
            Phase::Explore(index) => {
                if let Some(target) = self.script.explore.get(index) {
                    info!("Presentation exploring {} ({}/{})", target.name, index + 1, self.script.explore.len());
                }
            }
            _ => info!("Presentation phase: {}", next.name()),
        }
    }

    fn finish(&mut self, camera: &mut Camera, animation: &mut AnimationCoordinator) {
        if let Some(saved) = self.saved_pose.take() {
            camera.set_pose(saved);
        }
        self.phase = Phase::Idle;
        self.elapsed_in_phase = 0.0;
        animation.set_prop_scale(0.0);
        animation.set_clap_active(false);
    }
}

impl Default for CinematicDirector {
    fn default() -> Self {
        Self::new(CinematicScript::default())
    }
}

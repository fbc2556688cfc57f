use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use scene_navigator::cli::{Cli, RevealArg};
use scene_navigator::core::{Accumulator, Clock, FixedHz, WinitController};
use scene_navigator::headless::replay_presentation;
use scene_navigator::{InputSnapshot, SceneNavigationContext, ViewerConfig};

// === Constants ===

const SIMULATION_HZ: f32 = 60.0;
const MAX_STEPS_PER_FRAME: u8 = 8;
const STATUS_INTERVAL_HZ: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1024;
const INITIAL_WINDOW_HEIGHT: u32 = 768;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    context: SceneNavigationContext,
    input: WinitController,
    clock: Clock,
    steps: Accumulator,
    status_timer: FixedHz,
}

impl App {
    fn new(config: &ViewerConfig) -> Self {
        Self {
            window: None,
            context: SceneNavigationContext::new(config),
            input: WinitController::new(),
            clock: Clock::new(),
            steps: Accumulator::new(SIMULATION_HZ, MAX_STEPS_PER_FRAME),
            status_timer: FixedHz::new(STATUS_INTERVAL_HZ),
        }
    }

    /// Advance the simulation by the time since the last redraw
    /// Returns false when the user asked to quit
    fn frame(&mut self) -> bool {
        let delta = self.clock.tick();
        let mut input = self.input.snapshot();

        let mut keep_running = true;
        for step in self.steps.tick(delta) {
            let output = self.context.tick(&input, step);
            keep_running &= !output.quit_requested;
            // Input stays queued until a step consumes it
            self.input.reset_deltas();

            // Presses and pointer motion belong to the first step only
            input = InputSnapshot {
                actions: Vec::new(),
                pointer_delta: glam::Vec2::ZERO,
                ..input
            };
        }

        if self.status_timer.tick(delta) {
            self.report_status();
        }
        keep_running
    }

    fn report_status(&self) {
        let p = self.context.camera.position();
        let phase = self.context.director.phase();
        debug!(
            "phase={} camera=({:.2}, {:.2}, {:.2}) clap={:.3} prop={:.2}",
            phase.name(),
            p.x,
            p.y,
            p.z,
            self.context.animation.clap_offset(),
            self.context.animation.prop_scale()
        );
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "Scene Navigator - {} - ({:.1}, {:.1}, {:.1})",
                phase.name(),
                p.x,
                p.y,
                p.z
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Scene Navigator")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Mouse look: hide and hold the cursor
        window.set_cursor_visible(false);
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
        {
            warn!("Cursor grab unavailable: {}", e);
        }

        self.clock.reset();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                debug!("Window resized to {}x{}", size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if !self.frame() {
                    event_loop.exit();
                }
            }
            other => self.input.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config(cli: &Cli) -> Result<ViewerConfig> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    Ok(match cli.reveal {
        Some(RevealArg::Instant) => config.with_reveal(true),
        Some(RevealArg::Ramped) => config.with_reveal(false),
        None => config,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    if cli.headless {
        let mut context = SceneNavigationContext::new(&config);
        let summary = replay_presentation(&mut context, SIMULATION_HZ, cli.max_frames);
        let p = summary.final_pose.position;
        info!(
            "Replay {} after {} frames ({:.2}s simulated, {:.2}s scripted), camera back at ({:.2}, {:.2}, {:.2})",
            if summary.completed { "completed" } else { "stopped" },
            summary.frames,
            summary.simulated_seconds,
            config.presentation.total_duration(),
            p.x,
            p.y,
            p.z
        );
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(&config);

    info!("Scene Navigator - Controls: WASD, Up/Down or Space/Shift, mouse look, Q/E turn, C presentation, P clap, I prop, right click logs position, Escape quits");
    event_loop.run_app(&mut app).context("Event loop failed")?;

    Ok(())
}

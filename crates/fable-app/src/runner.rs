//! Application runner and frame loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::ensure;
use fable_core::constants::FIXED_TIMESTEP;
use fable_core::WorldConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::FableApp;
use crate::context::AppContext;
use crate::frame::FrameContext;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Application title (used in logs).
    pub title: String,
    /// Fixed physics timestep in seconds.
    pub fixed_timestep: f32,
    /// Target frames per second (None for unlimited).
    pub target_fps: Option<u32>,
    /// Stop after this many frames (None to run until the app exits).
    pub max_frames: Option<u64>,
    /// Start with the physics sweep paused.
    pub start_paused: bool,
    /// World configuration handed to the physics pass.
    pub world: WorldConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Fable Engine".to_string(),
            fixed_timestep: FIXED_TIMESTEP,
            target_fps: None,
            max_frames: None,
            start_paused: false,
            world: WorldConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the fixed physics timestep.
    pub fn with_fixed_timestep(mut self, dt: f32) -> Self {
        self.fixed_timestep = dt;
        self
    }

    /// Set the target FPS.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = Some(fps);
        self
    }

    /// Stop after `frames` frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Start paused or running.
    pub fn with_start_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    /// Set the world configuration.
    pub fn with_world(mut self, world: WorldConfig) -> Self {
        self.world = world;
        self
    }
}

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Does nothing if a subscriber is
/// already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

/// Run a FableApp with the given configuration.
///
/// This function initializes logging, builds the scene through
/// [`FableApp::init`] and runs the frame loop until the frame limit is hit
/// or the application asks to exit.
pub fn run_app<A: FableApp>(config: AppConfig) -> anyhow::Result<()> {
    init_logging();

    info!("{} starting...", config.title);

    let mut runner = AppRunner::<A>::new(config)?;
    runner.run()?;
    runner.cleanup();

    Ok(())
}

/// Drives an application frame by frame.
pub struct AppRunner<A: FableApp> {
    config: AppConfig,
    ctx: AppContext,
    app: A,
    target_frame_time: Option<Duration>,
}

impl<A: FableApp> AppRunner<A> {
    /// Build the context and initialize the application.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        ensure!(
            config.fixed_timestep.is_finite() && config.fixed_timestep > 0.0,
            "fixed timestep must be finite and positive, got {}",
            config.fixed_timestep
        );

        let mut ctx = AppContext::new(config.world, config.start_paused);
        let app = A::init(&mut ctx)?;

        info!(
            entities = ctx.entities.len(),
            dt = config.fixed_timestep,
            paused = ctx.is_paused(),
            "Application ready!"
        );

        let target_frame_time = config
            .target_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps)));

        Ok(Self {
            config,
            ctx,
            app,
            target_frame_time,
        })
    }

    pub const fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }

    pub const fn app(&self) -> &A {
        &self.app
    }

    /// Run one frame: update, render the previous state, then step physics.
    pub fn run_frame(&mut self) -> anyhow::Result<()> {
        let frame_start = Instant::now();
        let dt = self.config.fixed_timestep;
        let frame = FrameContext::new(dt, self.ctx.frame_count, self.ctx.is_paused());

        self.app.update(&mut self.ctx, &frame);
        self.app.render(&self.ctx, &frame)?;

        if let Some(report) = self.ctx.physics.step(&mut self.ctx.entities, dt)? {
            self.ctx.last_report = Some(report);
        }

        self.ctx.frame_count += 1;

        // Frame pacing
        if let Some(target) = self.target_frame_time {
            let elapsed = frame_start.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }

        Ok(())
    }

    /// Run frames until the frame limit is reached or the app asks to exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            if self
                .config
                .max_frames
                .is_some_and(|max| self.ctx.frame_count >= max)
            {
                info!("Frame limit reached");
                break;
            }

            self.run_frame()?;

            if self.app.should_exit(&self.ctx) {
                info!("Exit requested");
                break;
            }
        }
        Ok(())
    }

    /// Print statistics and let the app clean up.
    pub fn cleanup(mut self) {
        info!("Total frames: {}", self.ctx.frame_count);
        info!("Physics ticks: {}", self.ctx.physics.tick());
        self.app.cleanup(&mut self.ctx);
        info!("Cleanup complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fable_entity::Entity;
    use fable_physics::Rigidbody;
    use glam::Vec3;

    /// Records the falling body's height every time it is rendered.
    struct Recorder {
        rendered: Vec<f32>,
        pause_on_frame: Option<u64>,
    }

    impl FableApp for Recorder {
        fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
            let body = Rigidbody::with_world_gravity(1.0, ctx.physics.world())?;
            ctx.spawn(
                Entity::empty("body")
                    .with_component(fable_core::Transform::from_position(Vec3::new(0.0, 10.0, 0.0)))
                    .with_component(body),
            );
            Ok(Self {
                rendered: Vec::new(),
                pause_on_frame: None,
            })
        }

        fn update(&mut self, ctx: &mut AppContext, frame: &FrameContext) {
            if self.pause_on_frame == Some(frame.frame_number) {
                ctx.toggle_pause();
            }
        }

        fn render(&mut self, ctx: &AppContext, _frame: &FrameContext) -> anyhow::Result<()> {
            let y = ctx.entities[0].transform().map_or(f32::NAN, |t| t.position.y);
            self.rendered.push(y);
            Ok(())
        }
    }

    fn body_height(runner: &AppRunner<Recorder>) -> f32 {
        runner.context().entities[0].transform().unwrap().position.y
    }

    #[test]
    fn render_sees_previous_frame_state() {
        let mut runner = AppRunner::<Recorder>::new(AppConfig::default()).unwrap();
        for _ in 0..3 {
            runner.run_frame().unwrap();
        }

        // Frame n renders the state after n sweeps.
        let rendered = &runner.app().rendered;
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0], 10.0);
        assert!(rendered[2] < rendered[1] || rendered[1] == 10.0);
        assert!(body_height(&runner) < rendered[2]);
        assert_eq!(runner.context().physics.tick(), 3);
    }

    #[test]
    fn max_frames_stops_loop() {
        let mut runner =
            AppRunner::<Recorder>::new(AppConfig::default().with_max_frames(5)).unwrap();
        runner.run().unwrap();
        assert_eq!(runner.context().frame_count, 5);
        assert_eq!(runner.app().rendered.len(), 5);
    }

    #[test]
    fn start_paused_skips_physics() {
        let mut runner = AppRunner::<Recorder>::new(
            AppConfig::default()
                .with_start_paused(true)
                .with_max_frames(10),
        )
        .unwrap();
        runner.run().unwrap();

        assert_eq!(runner.context().physics.tick(), 0);
        assert!(runner.context().last_report().is_none());
        assert_eq!(body_height(&runner), 10.0);
    }

    #[test]
    fn toggling_pause_mid_run() {
        let mut runner =
            AppRunner::<Recorder>::new(AppConfig::default().with_max_frames(6)).unwrap();
        runner.app.pause_on_frame = Some(3);
        runner.run().unwrap();

        assert_eq!(runner.context().frame_count, 6);
        assert_eq!(runner.context().physics.tick(), 3);
        assert!(runner.context().is_paused());
    }

    #[test]
    fn rejects_invalid_timestep() {
        assert!(AppRunner::<Recorder>::new(AppConfig::default().with_fixed_timestep(0.0)).is_err());
        assert!(
            AppRunner::<Recorder>::new(AppConfig::default().with_fixed_timestep(f32::NAN)).is_err()
        );
    }
}

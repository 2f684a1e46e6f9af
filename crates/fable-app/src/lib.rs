//! Application framework for the Fable engine.
//!
//! This crate provides a trait-based host loop that handles:
//! - Logging initialization
//! - Scene ownership (the entity list)
//! - A fixed-timestep frame loop with optional frame pacing
//! - Play/pause gating of the physics sweep
//!
//! Each frame runs `update` (host input), then `render` against the state
//! left by the previous frame, then one physics sweep. Rendered output
//! therefore trails the simulation by exactly one tick.
//!
//! # Example
//!
//! ```no_run
//! use fable_app::{run_app, AppConfig, AppContext, FableApp, FrameContext};
//!
//! struct MyApp;
//!
//! impl FableApp for MyApp {
//!     fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         Ok(MyApp)
//!     }
//!
//!     fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default().with_max_frames(600))
//! }
//! ```

mod app;
mod context;
mod frame;
mod runner;

pub use app::FableApp;
pub use context::AppContext;
pub use frame::FrameContext;
pub use runner::{init_logging, run_app, AppConfig, AppRunner};

// Re-export commonly used types for convenience
pub use fable_core::WorldConfig;
pub use fable_entity::{Entity, PhysicsSystem, StepReport};

//! `FableApp` trait definition.

use crate::context::AppContext;
use crate::frame::FrameContext;

/// Trait for Fable applications.
///
/// Implement this trait to drive a scene with the Fable host loop. The
/// framework owns the entities and the physics pass; the application builds
/// the scene, reacts to input and draws.
pub trait FableApp: Sized {
    /// Initialize the application.
    ///
    /// Called once before the first frame. Populate `ctx.entities` here.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Handle input and other host-side state for this frame.
    ///
    /// Called before rendering. This is where a play/pause toggle belongs.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn update(&mut self, ctx: &mut AppContext, frame: &FrameContext) {}

    /// Draw the scene.
    ///
    /// Sees the state produced by the previous frame's physics sweep.
    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()>;

    /// Return `true` to stop the loop after the current frame.
    ///
    /// Default implementation never requests exit.
    #[allow(unused_variables)]
    fn should_exit(&self, ctx: &AppContext) -> bool {
        false
    }

    /// Cleanup before shutdown.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}

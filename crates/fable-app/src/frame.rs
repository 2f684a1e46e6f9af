//! Per-frame context.

/// Context for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// Fixed simulation timestep in seconds.
    pub dt: f32,
    /// Current frame number, starting at zero.
    pub frame_number: u64,
    /// Whether the physics sweep will be skipped this frame (as of frame start).
    pub paused: bool,
}

impl FrameContext {
    /// Create a new frame context.
    pub(crate) const fn new(dt: f32, frame_number: u64, paused: bool) -> Self {
        Self {
            dt,
            frame_number,
            paused,
        }
    }
}

//! Fable Engine Physics Sandbox
//!
//! Drops a unit box onto a static ground slab and logs the simulation as it
//! runs. Rendering is headless: the sandbox walks the scene the way a
//! renderer would and reports what it would draw.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p fable-sandbox -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--frames <N>`: Number of frames to run (default: 180)
//! - `--fps <N>`: Target frame rate, 0 for unlimited (default: 60)
//! - `--paused`: Start with physics paused
//! - `--toggle-at <N>`: Flip play/pause at frame N
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;

use fable_app::{run_app, AppConfig};

use crate::app::{Sandbox, SandboxParams};

fn main() -> anyhow::Result<()> {
    // Check for help flag before starting the app
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    let params = SandboxParams::from_args();

    let mut config = AppConfig::new("Fable Engine - Physics Sandbox")
        .with_max_frames(params.frames)
        .with_start_paused(params.start_paused);
    if params.fps > 0 {
        config = config.with_target_fps(params.fps);
    }

    run_app::<Sandbox>(config)
}

fn print_help() {
    eprintln!(
        "Fable Engine Physics Sandbox

USAGE:
    cargo run -p fable-sandbox -- [OPTIONS]

OPTIONS:
    --frames <N>            Number of frames to run (default: 180)
    --fps <N>               Target frame rate, 0 for unlimited (default: 60)
    --paused                Start with physics paused
    --toggle-at <N>         Flip play/pause at frame N
    -h, --help              Print this help message

EXAMPLES:
    # Watch the box land
    cargo run -p fable-sandbox

    # Run as fast as possible with contact details
    RUST_LOG=debug cargo run -p fable-sandbox -- --fps 0

    # Start paused and resume after one second
    cargo run -p fable-sandbox -- --paused --toggle-at 60

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

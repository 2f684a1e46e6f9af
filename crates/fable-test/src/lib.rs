//! Test harness for the Fable engine.
//!
//! Provides headless simulation stepping and ready-made scenes for
//! physics scenario tests.

pub mod harness;
pub mod scenes;

pub use harness::SimulationHarness;
pub use scenes::{dynamic_box, falling_box_scene, static_box};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Condition not met after {ticks} ticks")]
    Timeout { ticks: u64 },
    #[error("No entity named {0:?}")]
    MissingEntity(String),
    #[error("Engine error: {0}")]
    Engine(#[from] fable_core::Error),
}

pub type Result<T> = std::result::Result<T, TestError>;

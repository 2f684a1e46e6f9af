//! Core types, math, and configuration for the Fable engine.
//!
//! This crate provides the foundational types shared by the physics and
//! entity crates:
//! - Spatial state (`Transform`) with fixed X→Y→Z Euler rotation
//! - World configuration (gravity and world axes)
//! - Common error types

pub mod error;
pub mod math;
pub mod transform;
pub mod world;

pub use error::{Error, Result};
pub use transform::Transform;
pub use world::WorldConfig;

/// Engine-wide constants
pub mod constants {
    use glam::Vec3;

    /// Default gravitational acceleration magnitude (m/s²)
    pub const GRAVITY: f32 = 9.81;
    /// World up axis (+Y)
    pub const WORLD_UP: Vec3 = Vec3::Y;
    /// World right axis (+X)
    pub const WORLD_RIGHT: Vec3 = Vec3::X;
    /// World forward axis (+Z)
    pub const WORLD_FORWARD: Vec3 = Vec3::Z;
    /// Fixed timestep used by the reference scenes (60 Hz)
    pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
}

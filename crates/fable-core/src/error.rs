//! Error types for the engine.

use glam::Vec3;
use thiserror::Error;

/// Engine-wide error type.
///
/// Every variant describes a construction-time precondition failure. The
/// simulation itself never produces errors once its inputs are valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Rigidbody mass must be finite and strictly positive
    #[error("Invalid mass: {0} (must be finite and > 0)")]
    InvalidMass(f32),

    /// Linear damping must lie in (0, 1]
    #[error("Invalid damping factor: {0} (must be in (0, 1])")]
    InvalidDamping(f32),

    /// Box collider extents must be finite and strictly positive on every axis
    #[error("Degenerate collider size: {0} (every axis must be finite and > 0)")]
    DegenerateCollider(Vec3),

    /// Timestep must be finite and non-negative
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f32),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

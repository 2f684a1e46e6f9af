//! Immutable world configuration passed into each physics step.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{GRAVITY, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};

/// World-wide physical constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Gravitational acceleration (m/s²)
    pub gravity: Vec3,
    /// World up axis
    pub up: Vec3,
    /// World right axis
    pub right: Vec3,
    /// World forward axis
    pub forward: Vec3,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: -WORLD_UP * GRAVITY,
            up: WORLD_UP,
            right: WORLD_RIGHT,
            forward: WORLD_FORWARD,
        }
    }
}

impl WorldConfig {
    /// World without gravity.
    pub fn zero_gravity() -> Self {
        Self::default().with_gravity(Vec3::ZERO)
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }
}

//! Spatial state of an entity.

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{degrees_to_radians, euler_xyz_to_mat3};

/// Position, rotation and scale of an entity.
///
/// Position and scale share world units. Rotation is stored as Euler angles
/// in radians and applied in fixed X→Y→Z order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a transform from position, rotation (radians) and scale.
    #[inline]
    pub const fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create an unrotated, unscaled transform at `position`.
    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with rotation given in degrees.
    #[inline]
    pub fn from_degrees(position: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Self {
        Self::new(position, degrees_to_radians(rotation_degrees), scale)
    }

    /// Rotation as a 3x3 matrix (X, then Y, then Z).
    #[inline]
    pub fn rotation_matrix(&self) -> Mat3 {
        euler_xyz_to_mat3(self.rotation)
    }

    /// Local X, Y and Z axes expressed in world space.
    #[inline]
    pub fn axes(&self) -> [Vec3; 3] {
        let m = self.rotation_matrix();
        [m.x_axis, m.y_axis, m.z_axis]
    }

    /// Transform a point from local to world space, ignoring scale.
    #[inline]
    pub fn transform_point_unscaled(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation_matrix() * local
    }

    /// Model matrix (translation · rotation · scale) for rendering.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_mat3(&self.rotation_matrix());
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

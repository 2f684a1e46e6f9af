//! Math utilities and helpers.

use glam::{Mat3, Vec3};

/// Squared length below which a direction is treated as degenerate.
pub const DEGENERATE_AXIS_EPSILON: f32 = 1e-6;

/// Build a rotation matrix from Euler angles in radians.
///
/// The rotation about X is applied first, then Y, then Z. This is a fixed
/// order, not a general orientation representation.
#[inline]
pub fn euler_xyz_to_mat3(rotation: Vec3) -> Mat3 {
    Mat3::from_rotation_z(rotation.z)
        * Mat3::from_rotation_y(rotation.y)
        * Mat3::from_rotation_x(rotation.x)
}

/// Convert per-axis angles from degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: Vec3) -> Vec3 {
    Vec3::new(
        degrees.x.to_radians(),
        degrees.y.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Normalize `axis`, or return `None` if it is too short to carry a direction.
#[inline]
pub fn try_normalize_axis(axis: Vec3) -> Option<Vec3> {
    let length_squared = axis.length_squared();
    if length_squared < DEGENERATE_AXIS_EPSILON {
        None
    } else {
        Some(axis / length_squared.sqrt())
    }
}

/// Closed interval of scalar projections onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Smallest projection
    pub min: f32,
    /// Largest projection
    pub max: f32,
}

impl Interval {
    /// Project a set of points onto `axis` and return the covered interval.
    pub fn from_projection(points: &[Vec3], axis: Vec3) -> Self {
        points.iter().fold(
            Self {
                min: f32::INFINITY,
                max: f32::NEG_INFINITY,
            },
            |interval, point| {
                let d = point.dot(axis);
                Self {
                    min: interval.min.min(d),
                    max: interval.max.max(d),
                }
            },
        )
    }

    /// Length of the shared part of two intervals.
    ///
    /// Returns `None` when the intervals are disjoint. Touching intervals
    /// overlap by exactly zero.
    #[inline]
    pub fn overlap(&self, other: &Self) -> Option<f32> {
        if self.max < other.min || other.max < self.min {
            None
        } else {
            Some(self.max.min(other.max) - self.min.max(other.min))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn euler_identity() {
        assert_eq!(euler_xyz_to_mat3(Vec3::ZERO), Mat3::IDENTITY);
    }

    #[test]
    fn euler_applies_x_before_y() {
        // X first sends +Y to +Z, then Y sends +Z to +X.
        let m = euler_xyz_to_mat3(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        let v = m * Vec3::Y;
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn degrees_convert() {
        let r = degrees_to_radians(Vec3::new(90.0, 180.0, 0.0));
        assert_abs_diff_eq!(r.x, FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, std::f32::consts::PI, epsilon = 1e-6);
        assert_abs_diff_eq!(r.z, 0.0);
    }

    #[test]
    fn degenerate_axis_rejected() {
        assert!(try_normalize_axis(Vec3::ZERO).is_none());
        assert!(try_normalize_axis(Vec3::splat(1e-4)).is_none());
        let n = try_normalize_axis(Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn interval_overlap() {
        let points = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(2.0, 5.0, 0.0)];
        let a = Interval::from_projection(&points, Vec3::X);
        assert_eq!(a, Interval { min: -1.0, max: 2.0 });

        let b = Interval { min: 1.5, max: 4.0 };
        assert_abs_diff_eq!(a.overlap(&b).unwrap(), 0.5);

        let touching = Interval { min: 2.0, max: 3.0 };
        assert_eq!(a.overlap(&touching), Some(0.0));

        let disjoint = Interval { min: 2.5, max: 3.0 };
        assert!(a.overlap(&disjoint).is_none());
        assert!(disjoint.overlap(&a).is_none());
    }
}

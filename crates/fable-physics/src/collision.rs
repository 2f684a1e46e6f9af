//! OBB/OBB collision detection using the separating axis theorem.

use fable_core::math::{try_normalize_axis, Interval};
use fable_core::Transform;
use glam::Vec3;

use crate::collider::{BoxCollider, OrientedBox};

/// Result of testing one pair of colliders in one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionManifold {
    pub is_colliding: bool,
    /// Unit contact normal, pointing from the second box toward the first
    pub normal: Vec3,
    /// Overlap along `normal` (never negative)
    pub penetration_depth: f32,
    /// Approximate world-space contact point
    pub contact_point: Vec3,
    /// World-space center of the first box, including its collider offset
    pub box_center: Vec3,
}

impl CollisionManifold {
    /// Manifold of a pair that does not touch.
    pub const SEPARATED: Self = Self {
        is_colliding: false,
        normal: Vec3::ZERO,
        penetration_depth: 0.0,
        contact_point: Vec3::ZERO,
        box_center: Vec3::ZERO,
    };
}

/// Test two colliders placed on their owning transforms.
pub fn collide_boxes(
    collider_a: &BoxCollider,
    transform_a: &Transform,
    collider_b: &BoxCollider,
    transform_b: &Transform,
) -> CollisionManifold {
    detect_obb_obb(
        &collider_a.oriented(transform_a),
        &collider_b.oriented(transform_b),
    )
}

/// The 15 SAT candidate axes: face normals of `a`, face normals of `b`, and
/// the cross products of their edge directions.
///
/// Cross products of (nearly) parallel edges carry no direction and are
/// skipped instead of normalized.
fn candidate_axes<'a>(a: &'a OrientedBox, b: &'a OrientedBox) -> impl Iterator<Item = Vec3> + 'a {
    let edge_axes = a
        .axes
        .iter()
        .flat_map(move |edge_a| b.axes.iter().map(move |edge_b| edge_a.cross(*edge_b)));

    a.axes
        .iter()
        .chain(b.axes.iter())
        .copied()
        .chain(edge_axes)
        .filter_map(try_normalize_axis)
}

/// Separating axis test between two oriented boxes.
///
/// Returns at the first separating axis. Otherwise the axis of least overlap
/// becomes the normal (oriented from `b` toward `a`) and the overlap its
/// penetration depth. The contact point is the corner of `a` deepest along
/// the normal, moved half the depth back along it.
pub fn detect_obb_obb(a: &OrientedBox, b: &OrientedBox) -> CollisionManifold {
    let mut best: Option<(f32, Vec3)> = None;

    for axis in candidate_axes(a, b) {
        let interval_a = Interval::from_projection(&a.corners, axis);
        let interval_b = Interval::from_projection(&b.corners, axis);

        let Some(overlap) = interval_a.overlap(&interval_b) else {
            return CollisionManifold::SEPARATED;
        };

        if best.map_or(true, |(depth, _)| overlap < depth) {
            best = Some((overlap, axis));
        }
    }

    let Some((penetration_depth, mut normal)) = best else {
        return CollisionManifold::SEPARATED;
    };

    if normal.dot(a.center - b.center) < 0.0 {
        normal = -normal;
    }

    let deepest = a.corners.iter().copied().fold(a.corners[0], |deepest, corner| {
        if corner.dot(normal) < deepest.dot(normal) {
            corner
        } else {
            deepest
        }
    });

    CollisionManifold {
        is_colliding: true,
        normal,
        penetration_depth,
        contact_point: deepest + normal * (penetration_depth * 0.5),
        box_center: a.center,
    }
}

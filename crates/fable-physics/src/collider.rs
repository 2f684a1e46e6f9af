//! Box collider geometry.

use fable_core::{Error, Result, Transform};
use glam::Vec3;

/// Box collider attached to an entity.
///
/// The box is expressed relative to the owning entity's transform. Only the
/// transform's position and rotation apply; `Transform::scale` never affects
/// the collider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    center: Vec3,
    size: Vec3,
}

impl BoxCollider {
    /// Create a collider from a center offset and full extents.
    ///
    /// Every component of `size` must be finite and positive.
    pub fn new(center: Vec3, size: Vec3) -> Result<Self> {
        let valid = size.is_finite() && size.cmpgt(Vec3::ZERO).all();
        if !valid || !center.is_finite() {
            return Err(Error::DegenerateCollider(size));
        }
        Ok(Self { center, size })
    }

    /// Centered collider with the given full extents.
    pub fn from_size(size: Vec3) -> Result<Self> {
        Self::new(Vec3::ZERO, size)
    }

    /// Centered 1×1×1 collider.
    pub const fn unit() -> Self {
        Self {
            center: Vec3::ZERO,
            size: Vec3::ONE,
        }
    }

    #[inline]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub const fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    /// Corners in collider space (±half-extent per axis).
    pub fn local_corners(&self) -> [Vec3; 8] {
        let h = self.half_extents();
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { -h.x } else { h.x },
                if i & 2 == 0 { -h.y } else { h.y },
                if i & 4 == 0 { -h.z } else { h.z },
            )
        })
    }

    /// World-space oriented box for this collider on `transform`.
    ///
    /// Corners are first shifted by the negated center offset, then rotated
    /// (X, Y, Z) and translated by the transform.
    pub fn oriented(&self, transform: &Transform) -> OrientedBox {
        let corners = self
            .local_corners()
            .map(|corner| transform.transform_point_unscaled(corner - self.center));

        OrientedBox {
            center: transform.transform_point_unscaled(-self.center),
            axes: transform.axes(),
            corners,
        }
    }
}

/// Box in world space, ready for SAT projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    pub center: Vec3,
    /// Face normals of the box (rotated X, Y and Z axes)
    pub axes: [Vec3; 3],
    pub corners: [Vec3; 8],
}

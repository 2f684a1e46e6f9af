//! Impulse-based contact resolution.

use fable_core::{Transform, WorldConfig};
use glam::Vec3;
use tracing::{debug, trace};

use crate::body::Rigidbody;
use crate::collision::CollisionManifold;
use crate::generator::ContactLever;

/// Placeholder inertia factor: angular impulses are scaled by
/// `1 / (mass * INERTIA_FACTOR)` instead of an inertia tensor.
pub const INERTIA_FACTOR: f32 = 12.0;

/// What the resolver did to a body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Resolution {
    /// Body was pushed out along the contact normal
    pub corrected: bool,
    /// Magnitude of the linear impulse (zero if the bodies were separating)
    pub impulse: f32,
    /// Angular velocity change from the contact
    pub angular_impulse: Vec3,
    /// A contact torque generator was attached to the body
    pub attached_generator: bool,
}

/// Resolve one contact for `body`.
///
/// `manifold.normal` must point toward `body`. Only this body is corrected;
/// whatever it collided with is left untouched. The body is pushed out by
/// the full penetration depth, and if it is moving into the contact its
/// normal velocity is cancelled by a linear impulse, with the matching
/// angular impulse about the box center (`manifold.box_center`, which
/// includes the collider offset). The contact is then reported
/// to the body's torque generators together with the reaction force that
/// holds the body up against `world.gravity`.
pub fn resolve_contact(
    transform: &mut Transform,
    body: &mut Rigidbody,
    manifold: &CollisionManifold,
    world: &WorldConfig,
) -> Resolution {
    if body.is_kinematic || !manifold.is_colliding {
        return Resolution::default();
    }

    let normal = manifold.normal;
    let lever_arm = manifold.contact_point - manifold.box_center;

    transform.position += normal * manifold.penetration_depth;

    let closing_speed = body.velocity.dot(normal);
    if closing_speed >= 0.0 {
        trace!(closing_speed, "contact separating, position corrected only");
        return Resolution {
            corrected: true,
            ..Default::default()
        };
    }

    let mass = body.mass();
    let impulse = -closing_speed * mass;
    body.velocity += normal * (impulse / mass);

    let angular_impulse = lever_arm.cross(normal * impulse) / (mass * INERTIA_FACTOR);
    body.angular_velocity += angular_impulse;

    let attached_generator = body.report_contact(ContactLever {
        lever_arm,
        force: -world.gravity * mass,
    });
    if attached_generator {
        debug!(?lever_arm, "attached contact torque generator");
    }

    trace!(
        impulse,
        depth = manifold.penetration_depth,
        ?normal,
        "contact resolved"
    );

    Resolution {
        corrected: true,
        impulse,
        angular_impulse,
        attached_generator,
    }
}

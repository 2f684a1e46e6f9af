//! Semi-implicit (symplectic) Euler integration.

use fable_core::Transform;

use crate::body::Rigidbody;

/// Advance `transform` and `body` by one tick of length `dt`.
///
/// Position is advanced with the velocity from before this tick's update,
/// then velocity picks up `acceleration + force / mass` and decays by
/// `damping^dt`. Rotation and angular velocity follow the same pattern with
/// the torque accumulator. Both accumulators are zero afterwards.
///
/// Kinematic bodies keep their transform and velocities; only their
/// accumulators are cleared.
pub fn integrate(transform: &mut Transform, body: &mut Rigidbody, dt: f32) {
    if body.is_kinematic {
        body.clear_accumulators();
        return;
    }

    let inverse_mass = body.inverse_mass();
    let decay = body.linear_damping().powf(dt);

    transform.position += body.velocity * dt;
    let acceleration = body.acceleration + body.force_accumulator() * inverse_mass;
    body.velocity += acceleration * dt;
    body.velocity *= decay;

    transform.rotation += body.angular_velocity * dt;
    let angular_acceleration = body.angular_acceleration + body.torque_accumulator() * inverse_mass;
    body.angular_velocity += angular_acceleration * dt;
    body.angular_velocity *= decay;

    body.clear_accumulators();
}

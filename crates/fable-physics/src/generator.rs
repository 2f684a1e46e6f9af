//! Force and torque generators.
//!
//! A generator is invoked once per tick for the body it is attached to and
//! returns the contribution it wants added to the matching accumulator. The
//! body does the adding, so a generator can never overwrite what earlier
//! generators contributed.

use std::fmt;

use fable_core::WorldConfig;
use glam::Vec3;

use crate::body::Rigidbody;

/// Produces a force for a body each tick.
pub trait ForceGenerator: fmt::Debug {
    /// Force to add to `body`'s force accumulator for a tick of length `dt`.
    fn update_force(&mut self, body: &Rigidbody, dt: f32) -> Vec3;
}

/// Produces a torque for a body each tick.
pub trait TorqueGenerator: fmt::Debug {
    /// Torque to add to `body`'s torque accumulator for a tick of length `dt`.
    fn update_torque(&mut self, body: &Rigidbody, dt: f32) -> Vec3;

    /// Receive the latest contact experienced by the owning body.
    ///
    /// Called by the resolver on every non-separating impulse after the
    /// generator list has been populated.
    fn on_contact(&mut self, _contact: &ContactLever) {}
}

/// Uniform gravitational field: `force = mass * acceleration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    pub acceleration: Vec3,
}

impl Gravity {
    /// Gravity with an explicit acceleration vector.
    pub const fn new(acceleration: Vec3) -> Self {
        Self { acceleration }
    }

    /// Gravity taken from the world configuration.
    pub const fn from_world(world: &WorldConfig) -> Self {
        Self::new(world.gravity)
    }
}

impl ForceGenerator for Gravity {
    fn update_force(&mut self, body: &Rigidbody, _dt: f32) -> Vec3 {
        self.acceleration * body.mass()
    }
}

/// The same force every tick, independent of mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantForce(pub Vec3);

impl ForceGenerator for ConstantForce {
    fn update_force(&mut self, _body: &Rigidbody, _dt: f32) -> Vec3 {
        self.0
    }
}

/// Lever arm and force of a single contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactLever {
    /// Vector from the body's center to the contact point
    pub lever_arm: Vec3,
    /// Force acting at the contact point
    pub force: Vec3,
}

impl ContactLever {
    /// Torque about the body's center: `lever_arm × force`.
    #[inline]
    pub fn torque(&self) -> Vec3 {
        self.lever_arm.cross(self.force)
    }
}

/// Torque induced by a resting contact.
///
/// Holds the most recent contact reported by the resolver and turns it into
/// torque on the following tick. A contact is consumed once applied, so the
/// torque stops when the resolver stops reporting contacts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactTorqueGenerator {
    contact: Option<ContactLever>,
}

impl ContactTorqueGenerator {
    /// Generator primed with an initial contact.
    pub const fn with_contact(contact: ContactLever) -> Self {
        Self {
            contact: Some(contact),
        }
    }

    /// Contact waiting to be applied, if any.
    pub const fn pending_contact(&self) -> Option<&ContactLever> {
        self.contact.as_ref()
    }
}

impl TorqueGenerator for ContactTorqueGenerator {
    fn update_torque(&mut self, _body: &Rigidbody, _dt: f32) -> Vec3 {
        self.contact
            .take()
            .map_or(Vec3::ZERO, |contact| contact.torque())
    }

    fn on_contact(&mut self, contact: &ContactLever) {
        self.contact = Some(*contact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_scales_with_mass() {
        let body = Rigidbody::new(2.0, 1.0).unwrap();
        let mut gravity = Gravity::from_world(&WorldConfig::default());
        let force = gravity.update_force(&body, 1.0 / 60.0);
        assert_eq!(force, Vec3::new(0.0, -19.62, 0.0));
    }

    #[test]
    fn contact_torque_is_consumed() {
        let body = Rigidbody::new(1.0, 1.0).unwrap();
        let contact = ContactLever {
            lever_arm: Vec3::X,
            force: Vec3::Y,
        };
        let mut generator = ContactTorqueGenerator::with_contact(contact);

        assert_eq!(generator.update_torque(&body, 0.1), Vec3::Z);
        assert!(generator.pending_contact().is_none());
        assert_eq!(generator.update_torque(&body, 0.1), Vec3::ZERO);

        generator.on_contact(&contact);
        assert_eq!(generator.update_torque(&body, 0.1), Vec3::Z);
    }
}

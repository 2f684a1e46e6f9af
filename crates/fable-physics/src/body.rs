//! Rigid-body state.

use fable_core::{Error, Result, WorldConfig};
use glam::Vec3;

use crate::generator::{
    ContactLever, ContactTorqueGenerator, ForceGenerator, Gravity, TorqueGenerator,
};

/// Dynamic state of a rigid body.
///
/// Mass and damping are validated at construction and cannot be changed to
/// invalid values afterwards. The force and torque accumulators can only be
/// added to; the integrator clears them at the end of every step.
#[derive(Debug)]
pub struct Rigidbody {
    mass: f32,
    linear_damping: f32,
    /// Kinematic bodies are never integrated and never receive impulses.
    pub is_kinematic: bool,
    pub velocity: Vec3,
    /// Constant acceleration applied on top of accumulated forces.
    pub acceleration: Vec3,
    pub angular_velocity: Vec3,
    pub angular_acceleration: Vec3,
    force_accum: Vec3,
    torque_accum: Vec3,
    force_generators: Vec<Box<dyn ForceGenerator>>,
    torque_generators: Vec<Box<dyn TorqueGenerator>>,
}

impl Rigidbody {
    /// Create a body at rest.
    ///
    /// `mass` must be finite and positive; `linear_damping` must lie in
    /// `(0, 1]`, where `1.0` means no damping.
    pub fn new(mass: f32, linear_damping: f32) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidMass(mass));
        }
        if !linear_damping.is_finite() || linear_damping <= 0.0 || linear_damping > 1.0 {
            return Err(Error::InvalidDamping(linear_damping));
        }

        Ok(Self {
            mass,
            linear_damping,
            is_kinematic: false,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            angular_acceleration: Vec3::ZERO,
            force_accum: Vec3::ZERO,
            torque_accum: Vec3::ZERO,
            force_generators: Vec::new(),
            torque_generators: Vec::new(),
        })
    }

    /// Create an undamped body with a gravity generator from `world`.
    pub fn with_world_gravity(mass: f32, world: &WorldConfig) -> Result<Self> {
        Ok(Self::new(mass, 1.0)?.with_force_generator(Gravity::from_world(world)))
    }

    /// Mark the body as kinematic.
    #[must_use]
    pub fn kinematic(mut self) -> Self {
        self.is_kinematic = true;
        self
    }

    /// Set the initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Append a force generator.
    #[must_use]
    pub fn with_force_generator(mut self, generator: impl ForceGenerator + 'static) -> Self {
        self.add_force_generator(generator);
        self
    }

    /// Append a torque generator.
    #[must_use]
    pub fn with_torque_generator(mut self, generator: impl TorqueGenerator + 'static) -> Self {
        self.add_torque_generator(generator);
        self
    }

    pub fn add_force_generator(&mut self, generator: impl ForceGenerator + 'static) {
        self.force_generators.push(Box::new(generator));
    }

    pub fn add_torque_generator(&mut self, generator: impl TorqueGenerator + 'static) {
        self.torque_generators.push(Box::new(generator));
    }

    #[inline]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    #[inline]
    pub const fn linear_damping(&self) -> f32 {
        self.linear_damping
    }

    #[inline]
    pub const fn force_accumulator(&self) -> Vec3 {
        self.force_accum
    }

    #[inline]
    pub const fn torque_accumulator(&self) -> Vec3 {
        self.torque_accum
    }

    pub fn force_generator_count(&self) -> usize {
        self.force_generators.len()
    }

    pub fn torque_generator_count(&self) -> usize {
        self.torque_generators.len()
    }

    /// Add a force to the accumulator.
    #[inline]
    pub fn add_force(&mut self, force: Vec3) {
        self.force_accum += force;
    }

    /// Add a torque to the accumulator.
    #[inline]
    pub fn add_torque(&mut self, torque: Vec3) {
        self.torque_accum += torque;
    }

    /// Zero both accumulators.
    #[inline]
    pub fn clear_accumulators(&mut self) {
        self.force_accum = Vec3::ZERO;
        self.torque_accum = Vec3::ZERO;
    }

    /// Run every generator once, in attachment order.
    ///
    /// Each generator sees the body with the contributions of the generators
    /// before it already accumulated.
    pub fn apply_generators(&mut self, dt: f32) {
        let mut force_generators = std::mem::take(&mut self.force_generators);
        for generator in &mut force_generators {
            let force = generator.update_force(self, dt);
            self.force_accum += force;
        }
        self.force_generators = force_generators;

        let mut torque_generators = std::mem::take(&mut self.torque_generators);
        for generator in &mut torque_generators {
            let torque = generator.update_torque(self, dt);
            self.torque_accum += torque;
        }
        self.torque_generators = torque_generators;
    }

    /// Forward a contact to the torque generators.
    ///
    /// A body without torque generators gets a [`ContactTorqueGenerator`]
    /// attached exactly once; later contacts are handed to the existing
    /// generators instead. Returns `true` if a generator was attached.
    pub fn report_contact(&mut self, contact: ContactLever) -> bool {
        if self.torque_generators.is_empty() {
            self.add_torque_generator(ContactTorqueGenerator::with_contact(contact));
            return true;
        }

        for generator in &mut self.torque_generators {
            generator.on_contact(&contact);
        }
        false
    }
}

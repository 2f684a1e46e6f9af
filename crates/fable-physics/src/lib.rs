//! Rigid-body physics and OBB collision for the Fable engine.
//!
//! The pieces of one simulation tick, in the order the host runs them:
//! 1. [`Rigidbody::apply_generators`] fills the force/torque accumulators
//! 2. [`integrate`] advances transform and velocity, clearing accumulators
//! 3. [`collide_boxes`] tests a collider pair with the separating axis theorem
//! 4. [`resolve_contact`] pushes a body out and applies impulses
//!
//! The per-frame sweep over entities lives in `fable-entity`.

pub mod body;
pub mod collider;
pub mod collision;
pub mod generator;
pub mod integrator;
pub mod resolver;

pub use body::Rigidbody;
pub use collider::{BoxCollider, OrientedBox};
pub use collision::{collide_boxes, detect_obb_obb, CollisionManifold};
pub use generator::{
    ConstantForce, ContactLever, ContactTorqueGenerator, ForceGenerator, Gravity, TorqueGenerator,
};
pub use integrator::integrate;
pub use resolver::{resolve_contact, Resolution};

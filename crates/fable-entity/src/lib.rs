//! Entity system for the Fable engine.
//!
//! Each entity owns an insertion-ordered list of components. Lookup by kind
//! is a linear scan that returns the first match, so duplicates are legal but
//! only the first one is ever visible through a lookup.
//!
//! The per-frame physics sweep over a slice of entities lives in [`system`].

pub mod component;
pub mod entity;
pub mod render;
pub mod system;

pub use component::{Component, ComponentData, ComponentKind};
pub use entity::Entity;
pub use fable_core::Transform;
pub use fable_physics::{BoxCollider, Rigidbody};
pub use system::{step_physics, ContactEvent, PhysicsSystem, StepReport};

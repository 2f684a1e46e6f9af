//! Per-frame physics sweep over a slice of entities.
//!
//! One sweep runs, in order:
//! 1. force/torque generators of every dynamic body
//! 2. integration of every dynamic body (accumulators cleared)
//! 3. collision detection over every unordered pair with enabled colliders
//! 4. resolution of each colliding pair as soon as it is detected
//!
//! The host is expected to render the previous frame's state first and run
//! the sweep afterwards, so rendered output trails the simulation by one tick.

use fable_core::{Error, Result, WorldConfig};
use fable_physics::{
    collide_boxes, integrate, resolve_contact, CollisionManifold, Resolution,
};
use tracing::trace;

use crate::entity::Entity;

/// A colliding pair found during a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEvent {
    /// Index of the first entity of the pair
    pub first: usize,
    /// Index of the second entity of the pair (`first < second`)
    pub second: usize,
    /// Manifold as seen from the resolved entity (normal pointing toward it),
    /// or from `first` when neither entity could be moved
    pub manifold: CollisionManifold,
    /// Entity that was corrected, if either could be
    pub resolved: Option<usize>,
    pub resolution: Resolution,
}

/// Summary of one physics sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Dynamic bodies that were integrated
    pub bodies_integrated: usize,
    /// Collider pairs that went through detection
    pub pairs_tested: usize,
    /// Pairs that were found colliding, in detection order
    pub contacts: Vec<ContactEvent>,
    /// Contact torque generators attached during the sweep
    pub generators_attached: usize,
}

/// Run one physics sweep with timestep `dt`.
///
/// `dt` must be finite and non-negative. A zero `dt` still runs generators
/// and clears accumulators; use [`PhysicsSystem`] pausing to skip a frame.
///
/// Positional correction is single-sided: for each colliding pair only the
/// first dynamic entity (lowest index) is moved.
pub fn step_physics(entities: &mut [Entity], dt: f32, world: &WorldConfig) -> Result<StepReport> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(Error::InvalidTimestep(dt));
    }

    let mut report = StepReport::default();

    for entity in entities.iter_mut() {
        let Some((transform, body)) = entity.body_mut() else {
            continue;
        };
        if body.is_kinematic {
            body.clear_accumulators();
            continue;
        }
        body.apply_generators(dt);
        integrate(transform, body, dt);
        report.bodies_integrated += 1;
    }

    for first in 0..entities.len() {
        for second in first + 1..entities.len() {
            let (head, tail) = entities.split_at_mut(second);
            resolve_pair(
                (first, &mut head[first]),
                (second, &mut tail[0]),
                world,
                &mut report,
            );
        }
    }

    Ok(report)
}

fn resolve_pair(
    (first, a): (usize, &mut Entity),
    (second, b): (usize, &mut Entity),
    world: &WorldConfig,
    report: &mut StepReport,
) {
    let (Some(&collider_a), Some(&transform_a)) =
        (a.enabled_box_collider(), a.enabled_transform())
    else {
        return;
    };
    let (Some(&collider_b), Some(&transform_b)) =
        (b.enabled_box_collider(), b.enabled_transform())
    else {
        return;
    };

    report.pairs_tested += 1;

    let manifold = collide_boxes(&collider_a, &transform_a, &collider_b, &transform_b);
    if !manifold.is_colliding {
        return;
    }

    let (resolved, manifold, resolution) = if a.is_dynamic() {
        (Some(first), manifold, resolve_entity(a, &manifold, world))
    } else if b.is_dynamic() {
        let flipped = collide_boxes(&collider_b, &transform_b, &collider_a, &transform_a);
        (Some(second), flipped, resolve_entity(b, &flipped, world))
    } else {
        trace!(a = %a.name, b = %b.name, "contact between immovable entities");
        (None, manifold, Resolution::default())
    };

    if resolution.attached_generator {
        report.generators_attached += 1;
    }

    report.contacts.push(ContactEvent {
        first,
        second,
        manifold,
        resolved,
        resolution,
    });
}

fn resolve_entity(
    entity: &mut Entity,
    manifold: &CollisionManifold,
    world: &WorldConfig,
) -> Resolution {
    entity
        .body_mut()
        .map_or_else(Resolution::default, |(transform, body)| {
            resolve_contact(transform, body, manifold, world)
        })
}

/// Physics pass owned by the host loop.
///
/// Holds the world configuration and a pause flag. While paused the sweep is
/// skipped entirely: generators do not run and accumulators are left as they
/// are, which differs from stepping with a zero timestep.
#[derive(Clone, Debug, Default)]
pub struct PhysicsSystem {
    world: WorldConfig,
    paused: bool,
    tick: u64,
}

impl PhysicsSystem {
    pub const fn new(world: WorldConfig) -> Self {
        Self {
            world,
            paused: false,
            tick: 0,
        }
    }

    #[inline]
    pub const fn world(&self) -> &WorldConfig {
        &self.world
    }

    #[inline]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag, returning the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Number of sweeps that have actually run.
    #[inline]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Run one sweep unless paused.
    ///
    /// Returns `Ok(None)` for a skipped frame.
    pub fn step(&mut self, entities: &mut [Entity], dt: f32) -> Result<Option<StepReport>> {
        if self.paused {
            trace!(tick = self.tick, "physics paused, sweep skipped");
            return Ok(None);
        }

        let report = step_physics(entities, dt, &self.world)?;
        self.tick += 1;

        trace!(
            tick = self.tick,
            bodies = report.bodies_integrated,
            pairs = report.pairs_tested,
            contacts = report.contacts.len(),
            "physics step"
        );

        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, ComponentData, ComponentKind};
    use approx::assert_abs_diff_eq;
    use fable_core::Transform;
    use fable_physics::{BoxCollider, Rigidbody};
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn ground() -> Entity {
        Entity::empty("ground")
            .with_component(Transform::default())
            .with_component(BoxCollider::from_size(Vec3::new(5.0, 1.0, 5.0)).unwrap())
    }

    fn falling_box(y: f32, velocity: f32) -> Entity {
        Entity::empty("box")
            .with_component(Transform::from_position(Vec3::new(0.0, y, 0.0)))
            .with_component(
                Rigidbody::new(1.0, 1.0)
                    .unwrap()
                    .with_velocity(Vec3::new(0.0, velocity, 0.0)),
            )
            .with_component(BoxCollider::unit())
    }

    #[test]
    fn rejects_invalid_timestep() {
        let world = WorldConfig::default();
        let mut entities = vec![ground()];
        assert_eq!(
            step_physics(&mut entities, -DT, &world),
            Err(Error::InvalidTimestep(-DT))
        );
        assert!(step_physics(&mut entities, f32::NAN, &world).is_err());
        assert!(step_physics(&mut entities, 0.0, &world).is_ok());
    }

    #[test]
    fn static_entities_are_not_integrated() {
        let world = WorldConfig::default();
        let mut entities = vec![ground(), Entity::empty("marker")];
        let report = step_physics(&mut entities, DT, &world).unwrap();
        assert_eq!(report.bodies_integrated, 0);
        assert_eq!(report.pairs_tested, 0);
        assert_eq!(entities[0].transform().unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn dynamic_body_resolved_against_ground() {
        let world = WorldConfig::zero_gravity();
        // Entering the ground at 0.95 after this tick's integration.
        let mut entities = vec![ground(), falling_box(1.0, -3.0)];

        let report = step_physics(&mut entities, DT, &world).unwrap();

        assert_eq!(report.bodies_integrated, 1);
        assert_eq!(report.pairs_tested, 1);
        assert_eq!(report.contacts.len(), 1);

        let contact = report.contacts[0];
        assert_eq!((contact.first, contact.second), (0, 1));
        assert_eq!(contact.resolved, Some(1));
        assert_eq!(contact.manifold.normal, Vec3::Y);
        assert!(contact.resolution.attached_generator);
        assert_eq!(report.generators_attached, 1);

        let box_entity = &entities[1];
        assert_abs_diff_eq!(box_entity.transform().unwrap().position.y, 1.0, epsilon = 1e-5);
        assert!(box_entity.rigidbody().unwrap().velocity.y >= 0.0);
        assert_eq!(entities[0].transform().unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn only_first_dynamic_body_is_corrected() {
        let world = WorldConfig::zero_gravity();
        let mut entities = vec![falling_box(0.0, 0.0), falling_box(0.5, 0.0)];

        let report = step_physics(&mut entities, DT, &world).unwrap();

        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].resolved, Some(0));
        assert_abs_diff_eq!(entities[0].transform().unwrap().position.y, -0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(entities[1].transform().unwrap().position.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn kinematic_body_collides_but_does_not_move() {
        let world = WorldConfig::default();
        let platform = Entity::empty("platform")
            .with_component(Transform::default())
            .with_component(Rigidbody::with_world_gravity(1.0, &world).unwrap().kinematic())
            .with_component(BoxCollider::unit());
        let mut entities = vec![platform, falling_box(0.9, -1.0)];

        let report = step_physics(&mut entities, DT, &world).unwrap();

        assert_eq!(report.bodies_integrated, 1);
        assert_eq!(report.contacts[0].resolved, Some(1));
        let platform = &entities[0];
        assert_eq!(platform.transform().unwrap().position, Vec3::ZERO);
        assert_eq!(platform.rigidbody().unwrap().velocity, Vec3::ZERO);
        assert_eq!(platform.rigidbody().unwrap().force_accumulator(), Vec3::ZERO);
    }

    #[test]
    fn immovable_pair_is_reported_unresolved() {
        let world = WorldConfig::default();
        let mut entities = vec![ground(), ground()];
        let report = step_physics(&mut entities, DT, &world).unwrap();
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].resolved, None);
    }

    #[test]
    fn disabled_collider_is_skipped() {
        let world = WorldConfig::zero_gravity();
        let ghost = Entity::empty("ghost")
            .with_component(Transform::default())
            .with_component(Component::disabled(ComponentData::BoxCollider(
                BoxCollider::unit(),
            )));
        let mut entities = vec![ghost, falling_box(0.0, 0.0)];

        let report = step_physics(&mut entities, DT, &world).unwrap();
        assert_eq!(report.pairs_tested, 0);
        assert!(report.contacts.is_empty());
    }

    #[test]
    fn disabled_transform_leaves_physics() {
        let world = WorldConfig::default();
        let mut frozen = falling_box(0.9, -1.0);
        frozen
            .get_component_mut(ComponentKind::Transform)
            .unwrap()
            .set_enabled(false);
        let mut entities = vec![ground(), frozen];

        let report = step_physics(&mut entities, DT, &world).unwrap();

        assert_eq!(report.bodies_integrated, 0);
        assert_eq!(report.pairs_tested, 0);
        assert!(report.contacts.is_empty());
        assert_eq!(entities[1].transform().unwrap().position.y, 0.9);
        assert_eq!(entities[1].rigidbody().unwrap().velocity.y, -1.0);
    }

    #[test]
    fn paused_system_skips_sweep() {
        let mut system = PhysicsSystem::new(WorldConfig::default());
        let mut entities = vec![falling_box(4.0, -1.0)];
        entities[0].rigidbody_mut().unwrap().add_force(Vec3::X);

        system.set_paused(true);
        assert_eq!(system.step(&mut entities, DT).unwrap(), None);
        assert_eq!(system.tick(), 0);
        assert_eq!(entities[0].transform().unwrap().position.y, 4.0);
        assert_eq!(entities[0].rigidbody().unwrap().force_accumulator(), Vec3::X);

        assert!(!system.toggle_pause());
        let report = system.step(&mut entities, 0.0).unwrap().unwrap();
        assert_eq!(report.bodies_integrated, 1);
        assert_eq!(system.tick(), 1);
        assert_eq!(entities[0].transform().unwrap().position.y, 4.0);
        assert_eq!(entities[0].rigidbody().unwrap().force_accumulator(), Vec3::ZERO);
    }
}

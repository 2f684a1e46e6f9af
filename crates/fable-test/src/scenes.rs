//! Scene builders shared by scenario tests.

use fable_core::{Transform, WorldConfig};
use fable_entity::Entity;
use fable_physics::{BoxCollider, Rigidbody};
use glam::Vec3;

/// Index of the ground in [`falling_box_scene`].
pub const GROUND: usize = 0;
/// Index of the falling box in [`falling_box_scene`].
pub const FALLING_BOX: usize = 1;

/// Box with a collider and a rigidbody pulled by the world's gravity.
pub fn dynamic_box(
    name: &str,
    position: Vec3,
    size: Vec3,
    mass: f32,
    world: &WorldConfig,
) -> crate::Result<Entity> {
    Ok(Entity::empty(name)
        .with_component(Transform::from_position(position))
        .with_component(BoxCollider::from_size(size)?)
        .with_component(Rigidbody::with_world_gravity(mass, world)?))
}

/// Box with a collider and no rigidbody.
pub fn static_box(name: &str, position: Vec3, size: Vec3) -> crate::Result<Entity> {
    Ok(Entity::empty(name)
        .with_component(Transform::from_position(position))
        .with_component(BoxCollider::from_size(size)?))
}

/// A 5x1x5 static ground at the origin and a unit box of mass 1 at `y = 4`.
pub fn falling_box_scene(world: &WorldConfig) -> crate::Result<Vec<Entity>> {
    Ok(vec![
        static_box("ground", Vec3::ZERO, Vec3::new(5.0, 1.0, 5.0))?,
        dynamic_box("box", Vec3::new(0.0, 4.0, 0.0), Vec3::ONE, 1.0, world)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_box_scene_layout() {
        let scene = falling_box_scene(&WorldConfig::default()).unwrap();
        assert_eq!(scene.len(), 2);
        assert!(!scene[GROUND].is_dynamic());
        assert!(scene[FALLING_BOX].is_dynamic());
        assert_eq!(
            scene[FALLING_BOX].transform().unwrap().position,
            Vec3::new(0.0, 4.0, 0.0)
        );
        assert_eq!(scene[FALLING_BOX].rigidbody().unwrap().force_generator_count(), 1);
    }

    #[test]
    fn invalid_mass_is_an_engine_error() {
        let err = dynamic_box("bad", Vec3::ZERO, Vec3::ONE, 0.0, &WorldConfig::default())
            .unwrap_err();
        assert!(matches!(err, crate::TestError::Engine(fable_core::Error::InvalidMass(_))));
    }
}

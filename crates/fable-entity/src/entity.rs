//! Entity and component store.

use fable_core::Transform;
use fable_physics::{BoxCollider, Rigidbody};

use crate::component::{Component, ComponentData, ComponentKind};

/// Capacity reserved by the first component insertion.
pub const INITIAL_COMPONENT_CAPACITY: usize = 4;

/// A named, growable list of components.
///
/// Entities have no identity beyond their position in the host's entity
/// slice and are never destroyed. Components are only ever appended.
#[derive(Debug, Default)]
pub struct Entity {
    pub name: String,
    components: Vec<Component>,
}

impl Entity {
    /// Create an entity with no components and no reserved capacity.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Append a component, taking ownership of it.
    ///
    /// Storage starts at [`INITIAL_COMPONENT_CAPACITY`] and doubles whenever
    /// it is full.
    pub fn add_component(&mut self, component: impl Into<Component>) {
        if self.components.len() == self.components.capacity() {
            let additional = self.components.capacity().max(INITIAL_COMPONENT_CAPACITY);
            self.components.reserve_exact(additional);
        }
        self.components.push(component.into());
    }

    /// Builder form of [`Entity::add_component`].
    #[must_use]
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn component_capacity(&self) -> usize {
        self.components.capacity()
    }

    /// First component of `kind` in insertion order.
    pub fn get_component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    /// Mutable access to the first component of `kind` in insertion order.
    pub fn get_component_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.kind() == kind)
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.get_component(ComponentKind::Transform)
            .and_then(|c| c.data.as_transform())
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.get_component_mut(ComponentKind::Transform)
            .and_then(|c| c.data.as_transform_mut())
    }

    /// The first transform, if it is enabled.
    ///
    /// A disabled transform takes its entity out of physics entirely: it is
    /// neither integrated nor tested for collisions.
    pub fn enabled_transform(&self) -> Option<&Transform> {
        self.get_component(ComponentKind::Transform)
            .filter(|c| c.enabled)
            .and_then(|c| c.data.as_transform())
    }

    pub fn rigidbody(&self) -> Option<&Rigidbody> {
        self.get_component(ComponentKind::Rigidbody)
            .and_then(|c| c.data.as_rigidbody())
    }

    pub fn rigidbody_mut(&mut self) -> Option<&mut Rigidbody> {
        self.get_component_mut(ComponentKind::Rigidbody)
            .and_then(|c| c.data.as_rigidbody_mut())
    }

    pub fn box_collider(&self) -> Option<&BoxCollider> {
        self.get_component(ComponentKind::BoxCollider)
            .and_then(|c| c.data.as_box_collider())
    }

    /// The first collider, if it is enabled.
    pub fn enabled_box_collider(&self) -> Option<&BoxCollider> {
        self.get_component(ComponentKind::BoxCollider)
            .filter(|c| c.enabled)
            .and_then(|c| c.data.as_box_collider())
    }

    /// The first transform and the first rigidbody, borrowed together.
    ///
    /// Returns `None` if either is missing or disabled.
    pub fn body_mut(&mut self) -> Option<(&mut Transform, &mut Rigidbody)> {
        let mut transform = None;
        let mut body = None;

        for component in &mut self.components {
            let enabled = component.enabled;
            match &mut component.data {
                ComponentData::Transform(t) if transform.is_none() => transform = Some((enabled, t)),
                ComponentData::Rigidbody(b) if body.is_none() => body = Some((enabled, b)),
                _ => {}
            }
        }

        match (transform, body) {
            (Some((true, transform)), Some((true, body))) => Some((transform, body)),
            _ => None,
        }
    }

    /// Whether the resolver may move this entity: it has an enabled transform
    /// and an enabled, non-kinematic rigidbody.
    pub fn is_dynamic(&self) -> bool {
        self.enabled_transform().is_some()
            && self
                .get_component(ComponentKind::Rigidbody)
                .filter(|c| c.enabled)
                .and_then(|c| c.data.as_rigidbody())
                .is_some_and(|body| !body.is_kinematic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn empty_entity_has_no_storage() {
        let entity = Entity::empty("empty");
        assert_eq!(entity.name, "empty");
        assert_eq!(entity.component_count(), 0);
        assert_eq!(entity.component_capacity(), 0);
        assert!(entity.get_component(ComponentKind::Transform).is_none());
    }

    #[test]
    fn capacity_doubles_from_four() {
        let mut entity = Entity::empty("growing");
        entity.add_component(Transform::default());
        assert_eq!(entity.component_capacity(), 4);

        for _ in 0..3 {
            entity.add_component(Transform::default());
        }
        assert_eq!(entity.component_capacity(), 4);

        entity.add_component(Transform::default());
        assert_eq!(entity.component_capacity(), 8);
        assert_eq!(entity.component_count(), 5);
    }

    #[test]
    fn lookup_returns_first_match() {
        let mut entity = Entity::empty("duplicates");
        entity.add_component(BoxCollider::unit());
        entity.add_component(Transform::from_position(Vec3::X));
        entity.add_component(Transform::from_position(Vec3::Y));

        for _ in 0..3 {
            assert_eq!(entity.transform().unwrap().position, Vec3::X);
        }

        entity.transform_mut().unwrap().position = Vec3::Z;
        let positions: Vec<Vec3> = entity
            .components()
            .iter()
            .filter_map(|c| c.data.as_transform())
            .map(|t| t.position)
            .collect();
        assert_eq!(positions, vec![Vec3::Z, Vec3::Y]);
    }

    #[test]
    fn body_mut_requires_enabled_rigidbody() {
        let mut entity = Entity::empty("body")
            .with_component(Transform::default())
            .with_component(crate::Component::disabled(ComponentData::Rigidbody(
                Rigidbody::new(1.0, 1.0).unwrap(),
            )))
            .with_component(Rigidbody::new(2.0, 1.0).unwrap());

        // The disabled body shadows the second one.
        assert!(entity.body_mut().is_none());
        assert!(!entity.is_dynamic());

        entity
            .get_component_mut(ComponentKind::Rigidbody)
            .unwrap()
            .set_enabled(true);
        let (_, body) = entity.body_mut().unwrap();
        assert_eq!(body.mass(), 1.0);
        assert!(entity.is_dynamic());
    }

    #[test]
    fn disabled_transform_hides_body() {
        let mut entity = Entity::empty("frozen")
            .with_component(crate::Component::disabled(ComponentData::Transform(
                Transform::default(),
            )))
            .with_component(Transform::from_position(Vec3::Y))
            .with_component(Rigidbody::new(1.0, 1.0).unwrap());

        // The disabled transform shadows the enabled one behind it.
        assert!(entity.transform().is_some());
        assert!(entity.enabled_transform().is_none());
        assert!(entity.body_mut().is_none());
        assert!(!entity.is_dynamic());

        entity
            .get_component_mut(ComponentKind::Transform)
            .unwrap()
            .set_enabled(true);
        assert!(entity.is_dynamic());
        let (transform, _) = entity.body_mut().unwrap();
        assert_eq!(transform.position, Vec3::ZERO);
    }

    #[test]
    fn kinematic_body_is_not_dynamic() {
        let entity = Entity::empty("platform")
            .with_component(Transform::default())
            .with_component(Rigidbody::new(1.0, 1.0).unwrap().kinematic());
        assert!(!entity.is_dynamic());
    }

    #[test]
    fn disabled_collider_is_hidden_from_physics() {
        let entity = Entity::empty("ghost").with_component(crate::Component::disabled(
            ComponentData::BoxCollider(BoxCollider::unit()),
        ));
        assert!(entity.box_collider().is_some());
        assert!(entity.enabled_box_collider().is_none());
    }
}

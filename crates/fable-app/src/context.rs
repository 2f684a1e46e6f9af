//! Application context.

use fable_core::WorldConfig;
use fable_entity::{Entity, PhysicsSystem, StepReport};

/// Application context shared across all app methods.
///
/// Owns the scene and the physics pass. Nothing here is shared across
/// threads; the loop is single-threaded.
#[derive(Debug)]
pub struct AppContext {
    /// All entities in the scene; index order is pair-test order.
    pub entities: Vec<Entity>,
    /// Physics pass with world configuration and pause flag.
    pub physics: PhysicsSystem,
    /// Total frames run.
    pub frame_count: u64,
    /// Report of the most recent sweep that actually ran.
    pub(crate) last_report: Option<StepReport>,
}

impl AppContext {
    /// Create an empty scene.
    pub(crate) fn new(world: WorldConfig, paused: bool) -> Self {
        let mut physics = PhysicsSystem::new(world);
        physics.set_paused(paused);
        Self {
            entities: Vec::new(),
            physics,
            frame_count: 0,
            last_report: None,
        }
    }

    /// Add an entity, returning its index.
    pub fn spawn(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// First entity with the given name.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Report of the most recent sweep that ran (paused frames keep the old one).
    pub const fn last_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    #[inline]
    pub const fn is_paused(&self) -> bool {
        self.physics.is_paused()
    }

    /// Flip the play/pause flag, returning the new state.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.physics.toggle_pause();
        tracing::info!(paused, "physics {}", if paused { "paused" } else { "resumed" });
        paused
    }
}

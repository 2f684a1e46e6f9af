//! Headless simulation harness.
//!
//! Wraps a scene and a [`PhysicsSystem`] so scenario tests can step the
//! sweep tick by tick and wait for conditions without a host loop.

use fable_core::constants::FIXED_TIMESTEP;
use fable_core::WorldConfig;
use fable_entity::{ContactEvent, Entity, PhysicsSystem, StepReport};
use tracing::debug;

use crate::{Result, TestError};

/// Headless stepper for a scene.
#[derive(Debug)]
pub struct SimulationHarness {
    entities: Vec<Entity>,
    physics: PhysicsSystem,
    dt: f32,
}

impl SimulationHarness {
    /// Create a harness stepping `entities` at the default fixed timestep.
    pub const fn new(entities: Vec<Entity>, world: WorldConfig) -> Self {
        Self {
            entities,
            physics: PhysicsSystem::new(world),
            dt: FIXED_TIMESTEP,
        }
    }

    #[must_use]
    pub fn with_timestep(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub const fn dt(&self) -> f32 {
        self.dt
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub const fn physics(&self) -> &PhysicsSystem {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsSystem {
        &mut self.physics
    }

    /// First entity with the given name.
    pub fn entity(&self, name: &str) -> Result<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| TestError::MissingEntity(name.to_string()))
    }

    /// Run one sweep. Returns `None` while paused.
    pub fn step(&mut self) -> Result<Option<StepReport>> {
        Ok(self.physics.step(&mut self.entities, self.dt)?)
    }

    /// Run `ticks` sweeps, returning the last report that ran.
    pub fn step_n(&mut self, ticks: u64) -> Result<Option<StepReport>> {
        let mut last = None;
        for _ in 0..ticks {
            if let Some(report) = self.step()? {
                last = Some(report);
            }
        }
        Ok(last)
    }

    /// Step until `done` accepts a report, giving up after `max_ticks`.
    pub fn run_until<F>(&mut self, max_ticks: u64, mut done: F) -> Result<StepReport>
    where
        F: FnMut(&StepReport, &[Entity]) -> bool,
    {
        for _ in 0..max_ticks {
            if let Some(report) = self.step()? {
                if done(&report, &self.entities) {
                    debug!(tick = self.physics.tick(), "condition met");
                    return Ok(report);
                }
            }
        }
        Err(TestError::Timeout { ticks: max_ticks })
    }

    /// Step until the first contact involving entity `index`.
    pub fn run_until_contact(&mut self, index: usize, max_ticks: u64) -> Result<ContactEvent> {
        let report = self.run_until(max_ticks, |report, _| {
            report
                .contacts
                .iter()
                .any(|c| c.first == index || c.second == index)
        })?;
        report
            .contacts
            .into_iter()
            .find(|c| c.first == index || c.second == index)
            .ok_or(TestError::Timeout { ticks: max_ticks })
    }
}

//! The simulation engine: body lifecycle and the per-frame step
//!
//! [`Simulation`] is the root aggregate. It exclusively owns the body
//! collection, the active acceleration model and integrator (both swappable
//! at runtime), the fixed step size, and the trail configuration. The host
//! constructs and owns it; there is no global state, so several independent
//! simulations can coexist in one process.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;

use crate::simulation::forces::AccelerationModel;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodySpec, NVec2, System};
use crate::simulation::trail::Trail;

/// Errors surfaced by the engine. All recoverable; nothing here aborts the
/// host process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no body at index {0}")]
    InvalidIndex(usize),
}

/// Stable handle to a body, issued by [`Simulation::add`].
///
/// Handles are slot indices. A removed body's slot is never reused, so a
/// handle either resolves to the body it was issued for or reports
/// [`SimError::InvalidIndex`] after that body's removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

pub struct Simulation {
    system: System,
    model: AccelerationModel,
    integrator: Integrator,
    parameters: Parameters,
    rng: Pcg64, // defaulted body colors only; seeded for reproducible runs
}

impl Simulation {
    pub fn new(parameters: Parameters, model: AccelerationModel, integrator: Integrator) -> Self {
        let rng = Pcg64::seed_from_u64(parameters.seed);
        Self {
            system: System::new(),
            model,
            integrator,
            parameters,
            rng,
        }
    }

    /// Append a new body and return its handle
    pub fn add(&mut self, spec: BodySpec) -> BodyHandle {
        let color = spec
            .color
            .unwrap_or_else(|| u32::from_be_bytes([0, self.rng.gen(), self.rng.gen(), self.rng.gen()]));

        let body = Body {
            x: NVec2::new(spec.x, spec.y),
            v: NVec2::new(spec.vx, spec.vy),
            a: NVec2::zeros(),
            m: spec.mass,
            radius: spec.radius,
            color,
            name: spec.name,
            is_static: spec.is_static,
            trail: Trail::new(),
        };

        let index = self.system.push(body);
        debug!("add body #{} at ({}, {})", index, spec.x, spec.y);
        BodyHandle(index)
    }

    /// Remove the body behind `handle`, tombstoning its slot.
    ///
    /// The removed body is returned so the presentation layer can release
    /// whatever resources (sprites, trail graphics, labels) it keyed to the
    /// handle. Integration and force passes never observe the emptied slot.
    pub fn remove(&mut self, handle: BodyHandle) -> Result<Body, SimError> {
        let BodyHandle(index) = handle;
        let slot = self
            .system
            .slots
            .get_mut(index)
            .ok_or(SimError::InvalidIndex(index))?;
        let body = slot.take().ok_or(SimError::InvalidIndex(index))?;
        debug!("remove body #{index} ({})", body.name);
        Ok(body)
    }

    /// Advance the whole system by one fixed step, then record trails.
    ///
    /// One integrator pass over every live body, followed by trail
    /// bookkeeping for every live body. Static bodies skip integration but
    /// still participate in trails (trails are cosmetic, staticness is not).
    pub fn step(&mut self) {
        self.integrator
            .apply(&mut self.system, &self.model, self.parameters.h0);

        let interval = self.parameters.trail_interval;
        let capacity = self.parameters.trail_capacity;
        for (_, body) in self.system.bodies_mut() {
            let x = body.x;
            body.trail.record(x, interval, capacity);
        }
    }

    /// Swap the force law. The per-body cached acceleration is kept, so the
    /// next Verlet step blends the old model's last acceleration with the
    /// new model's first; trajectories stay deterministic across the swap.
    pub fn set_model(&mut self, model: AccelerationModel) {
        self.model = model;
    }

    /// Swap the integration scheme. Every cached acceleration is reset to
    /// zero: Euler never maintains the cache, so Verlet resuming after an
    /// Euler stretch must not read whatever value was left behind.
    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.integrator = integrator;
        for (_, body) in self.system.bodies_mut() {
            body.a = NVec2::zeros();
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&Body, SimError> {
        let BodyHandle(index) = handle;
        self.system
            .slots
            .get(index)
            .and_then(|s| s.as_ref())
            .ok_or(SimError::InvalidIndex(index))
    }

    /// Live bodies with their handles, in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.system.bodies().map(|(i, b)| (BodyHandle(i), b))
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.system.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_empty()
    }

    /// Current simulation time
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn model(&self) -> &AccelerationModel {
        &self.model
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }
}

//! Core state types for the planet simulation.
//!
//! Defines the body/system structs:
//! - `Body` – kinematic state plus presentation metadata and its trail
//! - `BodySpec` – defaulted creation record used by `Simulation::add`
//! - `PointMass` – immutable per-pass snapshot element for force evaluation
//! - `System` – the slot collection of bodies and the current time `t`
//!
//! Removal tombstones a slot instead of compacting the vector, so an index
//! handed out by `add` stays stable for the process lifetime. Iteration
//! helpers skip tombstoned slots.

use nalgebra::Vector2;

use crate::simulation::trail::Trail;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // cached acceleration, read and written by Verlet only
    pub m: f64, // mass
    pub radius: f64, // radius, opaque to the kernel (rendering scale)
    pub color: u32, // 0xRRGGBB, presentation only
    pub name: String,
    pub is_static: bool, // excluded from integration
    pub trail: Trail, // bounded position history
}

/// Creation record for a new body with the conventional defaults
/// (`vx = vy = 0`, `mass = 1`, `radius = 100`, random color, non-static).
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub mass: f64,
    pub radius: f64,
    pub color: Option<u32>, // None -> drawn from the simulation RNG
    pub name: String,
    pub is_static: bool,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            mass: 1.0,
            radius: 100.0,
            color: None,
            name: String::new(),
            is_static: false,
        }
    }
}

impl BodySpec {
    /// Spec for a defaulted body at position (x, y)
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Snapshot of one live body taken before an integration pass.
///
/// Force evaluation reads these instead of the live `Body` structs, so every
/// body's acceleration sees the same pre-step positions regardless of the
/// order bodies are updated in.
#[derive(Debug, Clone, Copy)]
pub struct PointMass {
    pub index: usize, // slot index, so a body can exclude itself
    pub x: NVec2,
    pub m: f64,
}

/// The collection of bodies plus the current simulation time `t`.
///
/// Slots are append-only: `remove` replaces the slot with `None` and freed
/// slots are never reused.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub slots: Vec<Option<Body>>,
    pub t: f64,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bodies (tombstones excluded)
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a body, returning its slot index
    pub fn push(&mut self, body: Body) -> usize {
        self.slots.push(Some(body));
        self.slots.len() - 1
    }

    /// Live bodies with their slot indices
    pub fn bodies(&self) -> impl Iterator<Item = (usize, &Body)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|b| (i, b)))
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = (usize, &mut Body)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|b| (i, b)))
    }

    /// Snapshot positions and masses of all live bodies.
    /// Taken once at the start of an integration pass, before any position
    /// is mutated for that step.
    pub fn snapshot(&self) -> Vec<PointMass> {
        self.bodies()
            .map(|(i, b)| PointMass {
                index: i,
                x: b.x,
                m: b.m,
            })
            .collect()
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – strategy selection (acceleration model, integrator)
//! - [`ParametersConfig`] – numerical parameters and trail settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   model: "newton"         # or "hooke"
//!   integrator: "verlet"    # or "euler"
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.001               # fixed step size
//!   seed: 42                # deterministic seed for defaulted colors
//!   G: 6.67408e-11          # gravitational constant (optional)
//!   trail_interval: 4       # ticks between trail captures (optional)
//!   trail_capacity: 2500    # retained trail points per body (optional)
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     m: 5.0e15
//!     radius: 500.0
//!     name: "Sol"
//!     is_static: true
//!   - x: [ 5000.0, 0.0 ]
//!     v: [ 0.0, 258.0 ]
//!     m: 1.0
//!     radius: 100.0
//!     name: "Terra"
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

/// Which integrator method is used by the engine
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler, one force evaluation per step
    Euler,

    #[serde(rename = "verlet")] // Velocity Verlet. Symplectic, long-term energy behavior, fixed step size
    Verlet,
}

/// Which force law drives the bodies
/// `model: "hooke"` or `model: "newton"`
#[derive(Deserialize, Debug, Clone)]
pub enum ModelConfig {
    #[serde(rename = "hooke")] // Restoring force toward the origin, ignores masses
    Hooke,

    #[serde(rename = "newton")] // Direct pairwise Newtonian gravity, O(n^2) per step
    Newton,
}

/// High-level engine configuration
/// Selects the two strategy axes of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub model: ModelConfig, // Force law computing per-body accelerations
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64, // time step size
    pub seed: u64, // deterministic seed to make runs reproducible
    #[serde(rename = "G")]
    pub g: Option<f64>, // gravitational constant, defaults to the physical value
    pub trail_interval: Option<u32>, // ticks between trail captures, default 4
    pub trail_capacity: Option<usize>, // retained trail points per body, default 2500
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    #[serde(default)]
    pub v: Vec<f64>, // Initial velocity vector `v`, defaults to rest
    #[serde(default = "default_mass")]
    pub m: f64, // Mass of the body
    #[serde(default = "default_radius")]
    pub radius: f64, // Radius of the body, used only for visualization scaling
    #[serde(default)]
    pub color: Option<u32>, // 0xRRGGBB; omitted -> drawn from the seeded RNG
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_static: bool, // Frozen bodies act as fixed force sources
}

fn default_mass() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    100.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Strategy selection (model, integrator)
    pub parameters: ParametersConfig, // Global numerical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
